//! # binson-core
//!
//! Pure-Rust encoder and decoder for **Binson**, a self-describing,
//! deterministic binary object notation.
//!
//! Binson models the same tree shapes as JSON (objects, arrays, strings,
//! numbers, booleans) plus raw byte strings, with no null. Every tree has
//! exactly one canonical encoding: integers and length prefixes use the
//! narrowest width, and object keys are sorted by their UTF-8 bytes. That
//! makes encoded bytes safe to hash and sign.
//!
//! ## Quick start
//!
//! ```rust
//! use binson_core::{decode, encode, Object, Value};
//!
//! let obj = Object::new().with("co", "u");
//! let bytes = encode(&Value::from(obj.clone()));
//! assert_eq!(bytes, [0x40, 0x14, 0x02, b'c', b'o', 0x14, 0x01, b'u', 0x41]);
//!
//! // Bytes → Value (roundtrip)
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back, Value::Object(obj));
//! ```
//!
//! ## Modules
//!
//! - [`value`], [`object`], [`array`]: the in-memory tree
//! - [`encoder`]: `Value` → canonical bytes
//! - [`decoder`]: bytes → `Value`, enforcing canonical key order
//! - [`mark`]: wire mark constants
//! - [`error`]: `BinsonError` and `ErrorKind`
//! - [`options`]: `DecodeOptions` (depth limit, trailing-data policy)
//! - [`hex`]: hex fixtures
//! - [`json`]: JSON interchange
//! - [`bridge`]: serde `Serialize`/`Deserialize` ↔ `Value`

pub mod array;
pub mod bridge;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hex;
pub mod json;
pub mod mark;
pub mod object;
pub mod options;
pub mod value;

pub use array::Array;
pub use bridge::{from_value, to_value};
pub use decoder::{decode, decode_object, decode_prefix, decode_with};
pub use encoder::{encode, encode_into, encoded_len};
pub use error::{BinsonError, ErrorKind, Result};
pub use mark::Mark;
pub use object::Object;
pub use options::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use value::{Value, ValueKind};
