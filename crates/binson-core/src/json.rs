//! JSON interchange for [`Value`] trees.
//!
//! JSON and Binson overlap but are not the same model, so the mapping is
//! lossy in both directions:
//!
//! | Binson | JSON |
//! |---|---|
//! | `Bytes` | string `"0x" + hex` |
//! | non-finite `Double` | `null` |
//! | `Int` / `Double` | number (an integral JSON number comes back as `Int`) |
//!
//! JSON `null` has no Binson counterpart and is rejected on the way in.

use serde_json::{Map, Number};

use crate::array::Array;
use crate::error::{BinsonError, Result};
use crate::object::Object;
use crate::value::Value;

/// Convert a Binson value to JSON. Object keys keep canonical order.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number(Number::from(*i)),
        Value::Double(d) => Number::from_f64(*d)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => serde_json::Value::String(format!("0x{}", hex::encode(b))),
        Value::Array(a) => serde_json::Value::Array(a.iter().map(to_json).collect()),
        Value::Object(o) => {
            let mut map = Map::with_capacity(o.len());
            for (k, v) in o {
                map.insert(k.clone(), to_json(v));
            }
            serde_json::Value::Object(map)
        }
    }
}

/// Convert JSON to a Binson value.
///
/// ```
/// use binson_core::{json::from_json, Value};
/// let v = from_json(&serde_json::json!({"n": 1, "b": "0x0202"})).unwrap();
/// assert_eq!(v.get("b"), Some(&Value::Bytes(vec![2, 2])));
/// ```
pub fn from_json(json: &serde_json::Value) -> Result<Value> {
    match json {
        serde_json::Value::Null => Err(BinsonError::Unsupported(
            "JSON null has no Binson representation".into(),
        )),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => from_number(n),
        serde_json::Value::String(s) => Ok(from_string(s)),
        serde_json::Value::Array(items) => {
            let mut arr = Array::with_capacity(items.len());
            for item in items {
                arr.push(from_json(item)?);
            }
            Ok(Value::Array(arr))
        }
        serde_json::Value::Object(map) => {
            let mut obj = Object::new();
            for (k, v) in map {
                obj.insert(k.clone(), from_json(v)?);
            }
            Ok(Value::Object(obj))
        }
    }
}

fn from_number(n: &Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    n.as_f64()
        .map(Value::Double)
        .ok_or_else(|| BinsonError::Unsupported(format!("JSON number {n} is out of range")))
}

// "0x" plus valid hex is Bytes; anything else, including "0xzz", stays text.
fn from_string(s: &str) -> Value {
    if let Some(digits) = s.strip_prefix("0x") {
        if let Ok(bytes) = hex::decode(digits) {
            return Value::Bytes(bytes);
        }
    }
    Value::String(s.to_string())
}

pub fn to_json_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&to_json(value))?)
}

pub fn to_json_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(value))?)
}

/// Parse JSON text and convert it with [`from_json`].
pub fn from_json_str(text: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn non_finite_doubles_become_null() {
        assert_eq!(to_json(&Value::Double(f64::INFINITY)), json!(null));
        assert_eq!(to_json(&Value::Double(f64::NAN)), json!(null));
        assert_eq!(to_json(&Value::Double(2.5)), json!(2.5));
    }

    #[test]
    fn bytes_render_as_prefixed_hex() {
        assert_eq!(to_json(&Value::Bytes(vec![0xca, 0xfe])), json!("0xcafe"));
        assert_eq!(from_string("0xcafe"), Value::Bytes(vec![0xca, 0xfe]));
        assert_eq!(from_string("0xnope"), Value::from("0xnope"));
    }

    #[test]
    fn integral_numbers_become_int() {
        assert_eq!(from_json(&json!(7)).unwrap(), Value::Int(7));
        assert_eq!(from_json(&json!(-7)).unwrap(), Value::Int(-7));
        assert_eq!(from_json(&json!(7.5)).unwrap(), Value::Double(7.5));
        assert_eq!(
            from_json(&json!(u64::MAX)).unwrap(),
            Value::Double(u64::MAX as f64)
        );
    }

    #[test]
    fn null_is_unsupported() {
        let err = from_json(&json!({"a": [1, null]})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn malformed_text_is_a_json_error() {
        assert_eq!(from_json_str("{").unwrap_err().kind(), ErrorKind::Json);
    }

    #[test]
    fn keys_come_out_sorted() {
        let v = from_json_str(r#"{"b": 1, "a": 2}"#).unwrap();
        assert_eq!(to_json_string(&v).unwrap(), r#"{"a":2,"b":1}"#);
    }
}
