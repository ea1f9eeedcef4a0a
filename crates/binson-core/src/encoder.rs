//! Binson Encoder: converts a [`Value`] tree into its canonical byte form.
//!
//! Encoding is total: every well-formed tree has exactly one canonical
//! encoding, so nothing here returns a `Result`. Canonical form means:
//!
//! - **Minimal-width integers**: the narrowest of 1/2/4/8 bytes whose signed
//!   range contains the value, little-endian.
//! - **Minimal-width length prefixes**: strings and bytes use a 1-byte prefix
//!   up to 127, a 2-byte prefix up to 32767, and a 4-byte prefix beyond that
//!   (the positive range of a signed 8/16-bit integer, not the unsigned one).
//! - **Big-endian doubles**: the IEEE-754 bit pattern, most significant byte first.
//! - **Sorted keys**: object fields in ascending byte order of their UTF-8 keys.
//!
//! # Example
//! ```
//! use binson_core::{encode, Object};
//! let obj = Object::new().with("i", 1);
//! assert_eq!(encode(&obj.into()), [0x40, 0x14, 0x01, 0x69, 0x10, 0x01, 0x41]);
//! ```

use crate::array::Array;
use crate::mark;
use crate::object::Object;
use crate::value::Value;

/// Encode a value into a freshly allocated, exactly sized buffer.
///
/// String and bytes payloads are limited to `u32::MAX` bytes, the largest
/// length the 4-byte prefix can carry.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out);
    tracing::trace!(len = out.len(), kind = %value.kind(), "encoded binson value");
    out
}

/// Append the canonical encoding of `value` to `out`.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Bool(true) => out.push(mark::TRUE),
        Value::Bool(false) => out.push(mark::FALSE),
        Value::Int(i) => encode_integer(*i, out),
        Value::Double(d) => {
            out.push(mark::DOUBLE);
            out.extend_from_slice(&d.to_bits().to_be_bytes());
        }
        Value::String(s) => encode_string(s, out),
        Value::Bytes(b) => {
            encode_length([mark::BYTES1, mark::BYTES2, mark::BYTES4], b.len(), out);
            out.extend_from_slice(b);
        }
        Value::Array(a) => encode_array(a, out),
        Value::Object(o) => encode_object(o, out),
    }
}

/// Exact number of bytes [`encode`] will produce for `value`.
pub fn encoded_len(value: &Value) -> usize {
    match value {
        Value::Bool(_) => 1,
        Value::Int(i) => 1 + integer_width(*i),
        Value::Double(_) => 9,
        Value::String(s) => 1 + length_width(s.len()) + s.len(),
        Value::Bytes(b) => 1 + length_width(b.len()) + b.len(),
        Value::Array(a) => 2 + a.iter().map(encoded_len).sum::<usize>(),
        Value::Object(o) => {
            2 + o
                .iter()
                .map(|(k, v)| 1 + length_width(k.len()) + k.len() + encoded_len(v))
                .sum::<usize>()
        }
    }
}

/// Emit `[begin-array, items..., end-array]`. No count prefix.
pub(crate) fn encode_array(array: &Array, out: &mut Vec<u8>) {
    out.push(mark::BEGIN_ARRAY);
    for item in array {
        encode_into(item, out);
    }
    out.push(mark::END_ARRAY);
}

/// Emit `[begin, (key, value)..., end]`. `Object` iterates in canonical key
/// order already, so no sort happens here.
pub(crate) fn encode_object(object: &Object, out: &mut Vec<u8>) {
    out.push(mark::BEGIN);
    for (key, value) in object {
        encode_string(key, out);
        encode_into(value, out);
    }
    out.push(mark::END);
}

fn encode_string(s: &str, out: &mut Vec<u8>) {
    encode_length([mark::STRING1, mark::STRING2, mark::STRING4], s.len(), out);
    out.extend_from_slice(s.as_bytes());
}

/// Write the integer mark for the narrowest fitting width, then the value
/// truncated to that width, little-endian.
fn encode_integer(i: i64, out: &mut Vec<u8>) {
    match integer_width(i) {
        1 => {
            out.push(mark::INTEGER1);
            out.extend_from_slice(&(i as i8).to_le_bytes());
        }
        2 => {
            out.push(mark::INTEGER2);
            out.extend_from_slice(&(i as i16).to_le_bytes());
        }
        4 => {
            out.push(mark::INTEGER4);
            out.extend_from_slice(&(i as i32).to_le_bytes());
        }
        _ => {
            out.push(mark::INTEGER8);
            out.extend_from_slice(&i.to_le_bytes());
        }
    }
}

/// Write one of `marks` (1/2/4-byte prefix variants) followed by `len`.
fn encode_length(marks: [u8; 3], len: usize, out: &mut Vec<u8>) {
    match length_width(len) {
        1 => {
            out.push(marks[0]);
            out.push(len as u8);
        }
        2 => {
            out.push(marks[1]);
            out.extend_from_slice(&(len as u16).to_le_bytes());
        }
        _ => {
            debug_assert!(len <= u32::MAX as usize, "payload of {len} bytes exceeds u32 prefix");
            out.push(marks[2]);
            out.extend_from_slice(&(len as u32).to_le_bytes());
        }
    }
}

fn integer_width(i: i64) -> usize {
    if i8::try_from(i).is_ok() {
        1
    } else if i16::try_from(i).is_ok() {
        2
    } else if i32::try_from(i).is_ok() {
        4
    } else {
        8
    }
}

// Thresholds follow the signed positive range (127 / 32767), not u8/u16.
fn length_width(len: usize) -> usize {
    if len <= i8::MAX as usize {
        1
    } else if len <= i16::MAX as usize {
        2
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_at_boundaries() {
        assert_eq!(integer_width(i8::MIN as i64), 1);
        assert_eq!(integer_width(i8::MAX as i64 + 1), 2);
        assert_eq!(integer_width(i16::MIN as i64 - 1), 4);
        assert_eq!(integer_width(i32::MAX as i64), 4);
        assert_eq!(integer_width(i32::MAX as i64 + 1), 8);
        assert_eq!(integer_width(i64::MIN), 8);
    }

    #[test]
    fn length_widths_use_signed_thresholds() {
        assert_eq!(length_width(127), 1);
        assert_eq!(length_width(128), 2);
        assert_eq!(length_width(32767), 2);
        assert_eq!(length_width(32768), 4);
    }

    #[test]
    fn four_byte_prefix_reaches_u32_max() {
        let mut out = Vec::new();
        encode_length([mark::BYTES1, mark::BYTES2, mark::BYTES4], u32::MAX as usize, &mut out);
        assert_eq!(out, [mark::BYTES4, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    #[cfg(all(debug_assertions, target_pointer_width = "64"))]
    #[should_panic(expected = "exceeds u32 prefix")]
    fn oversized_payload_length_is_caught() {
        let mut out = Vec::new();
        encode_length([mark::STRING1, mark::STRING2, mark::STRING4], u32::MAX as usize + 1, &mut out);
    }

    #[test]
    fn negative_integers_are_twos_complement() {
        assert_eq!(encode(&Value::Int(-1)), [0x10, 0xff]);
        assert_eq!(encode(&Value::Int(-129)), [0x11, 0x7f, 0xff]);
    }

    #[test]
    fn double_is_big_endian() {
        assert_eq!(
            encode(&Value::Double(1.0)),
            [0x46, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn encoded_len_matches_output() {
        let value = Value::from(
            Object::new()
                .with("long", "x".repeat(200))
                .with("n", i64::MAX)
                .with("list", Array::new().with(1.5).with(false).with(vec![0u8; 40000])),
        );
        assert_eq!(encoded_len(&value), encode(&value).len());
    }

    #[test]
    fn encode_into_appends() {
        let mut out = vec![0xaa];
        encode_into(&Value::Bool(true), &mut out);
        assert_eq!(out, [0xaa, 0x44]);
    }
}
