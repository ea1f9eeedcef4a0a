//! Serde bridge between Rust types and the Binson value tree.
//!
//! Any `Serialize` type can be turned into a [`Value`] and any
//! `DeserializeOwned` type read back out of one. The mapping:
//!
//! - structs and maps → `Object`; sequences and tuples → `Array`
//! - `None` and `()` fields are left out of the enclosing object
//! - unit enum variants → `String`; data-carrying variants → a one-entry
//!   `Object` keyed by the variant name
//! - `&[u8]` via `serialize_bytes` (e.g. `serde_bytes`) → `Bytes`
//! - unsigned integers above `i64::MAX` → `Unsupported`
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: Option<String>,
//! }
//!
//! let p = Point { x: 1, y: -2, label: None };
//! let bytes = binson_core::bridge::to_bytes(&p).unwrap();
//! let back: Point = binson_core::bridge::from_bytes(&bytes).unwrap();
//! assert_eq!(p, back);
//! ```

mod de;
mod ser;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use ser::ValueSerializer;

use crate::error::{BinsonError, Result};
use crate::value::Value;

/// Convert any `Serialize` type into a [`Value`].
pub fn to_value<T: ?Sized + Serialize>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)?.ok_or_else(|| {
        BinsonError::Unsupported("top-level None or unit has no Binson representation".into())
    })
}

/// Read a `DeserializeOwned` type out of a [`Value`].
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(value)
}

/// Serialize straight to canonical Binson bytes.
pub fn to_bytes<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(crate::encoder::encode(&to_value(value)?))
}

/// Strictly decode Binson bytes into a `DeserializeOwned` type.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    from_value(crate::decoder::decode(bytes)?)
}
