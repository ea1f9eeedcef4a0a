//! Binson Decoder: parses bytes back into a [`Value`] tree.
//!
//! A recursive-descent parser keyed on the next mark byte. Each nested value
//! runs the same small machine (read mark → dispatch → read payload) on a
//! fresh stack frame; there is no state outside the cursor.
//!
//! # Key design decisions
//!
//! - **Strict by default**: [`decode`] rejects bytes after the top-level
//!   value. [`decode_prefix`] is the lenient entry point and reports how many
//!   bytes it consumed.
//! - **Canonical keys are a parse invariant**: every object key must be
//!   strictly greater (UTF-8 byte order) than the previous one. Unsorted or
//!   duplicate keys fail with `InvalidFieldName` rather than being accepted.
//! - **Any integer/length width is accepted**: `0x13` followed by 8 bytes of
//!   `1` decodes to `Int(1)`; re-encoding normalizes it to minimal width.
//! - **Depth ceiling**: nesting beyond [`DecodeOptions::max_depth`] fails
//!   with `DepthLimitExceeded` instead of exhausting the stack.

use crate::array::Array;
use crate::error::{BinsonError, Result};
use crate::mark::Mark;
use crate::object::Object;
use crate::options::DecodeOptions;
use crate::value::Value;

/// Strictly decode exactly one value from `bytes` with default options.
///
/// ```
/// use binson_core::{decode, ErrorKind};
/// assert!(decode(&[0x40, 0x41]).unwrap().is_object());
/// assert_eq!(decode(&[0x40, 0x41, 0x99]).unwrap_err().kind(), ErrorKind::TrailingData);
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode one value from the front of `bytes`, ignoring anything after it.
/// Returns the value and the number of bytes it occupied.
pub fn decode_prefix(bytes: &[u8]) -> Result<(Value, usize)> {
    let opts = DecodeOptions::default();
    let mut decoder = Decoder::new(bytes, &opts);
    let value = logged(decoder.read_value())?;
    Ok((value, decoder.pos))
}

/// Decode one value using explicit [`DecodeOptions`].
pub fn decode_with(bytes: &[u8], opts: &DecodeOptions) -> Result<Value> {
    let mut decoder = Decoder::new(bytes, opts);
    let value = logged(decoder.read_value())?;
    if !opts.allow_trailing && decoder.remaining() > 0 {
        return logged(Err(BinsonError::TrailingData {
            offset: decoder.pos,
            remaining: decoder.remaining(),
        }));
    }
    tracing::trace!(len = decoder.pos, kind = %value.kind(), "decoded binson value");
    Ok(value)
}

/// Strictly decode bytes whose top-level value must be an object.
pub fn decode_object(bytes: &[u8]) -> Result<Object> {
    match decode(bytes)? {
        Value::Object(obj) => Ok(obj),
        other => logged(Err(BinsonError::invalid(
            0,
            format!("top-level value is {}, expected object", other.kind()),
        ))),
    }
}

/// One wire element as seen by [`elements`]: where it starts, how deeply it
/// is nested, its mark, and the decoded payload for scalar marks.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub offset: usize,
    pub depth: usize,
    pub mark: Mark,
    pub scalar: Option<Value>,
}

/// Flat listing of every wire element in `bytes`, in order.
///
/// This checks framing (marks, lengths, UTF-8, balanced containers) but not
/// key order; use [`decode`] for full validation.
pub fn elements(bytes: &[u8]) -> Result<Vec<Element>> {
    logged(list_elements(bytes))
}

fn list_elements(bytes: &[u8]) -> Result<Vec<Element>> {
    let opts = DecodeOptions::default().allow_trailing(true);
    let mut decoder = Decoder::new(bytes, &opts);
    let mut out = Vec::new();
    let mut open: Vec<Mark> = Vec::new();

    while decoder.remaining() > 0 {
        let offset = decoder.pos;
        let mark = decoder.read_mark()?;
        let scalar = match mark {
            Mark::Begin | Mark::BeginArray => {
                out.push(Element {
                    offset,
                    depth: open.len(),
                    mark,
                    scalar: None,
                });
                open.push(mark);
                continue;
            }
            Mark::End | Mark::EndArray => {
                let expected = if mark == Mark::End {
                    Mark::Begin
                } else {
                    Mark::BeginArray
                };
                if open.pop() != Some(expected) {
                    return Err(BinsonError::invalid(offset, format!("unbalanced {mark}")));
                }
                None
            }
            _ => Some(decoder.read_scalar(mark, offset)?),
        };
        out.push(Element {
            offset,
            depth: open.len(),
            mark,
            scalar,
        });
    }

    if !open.is_empty() {
        return Err(BinsonError::InsufficientData {
            offset: decoder.pos,
            needed: 1,
            available: 0,
        });
    }
    Ok(out)
}

fn logged<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::debug!(
            kind = ?err.kind(),
            offset = ?err.offset(),
            error = %err,
            "binson decode failed"
        );
    }
    result
}

/// What a mark in value position turned out to be.
enum Item {
    Value(Value),
    End,
    EndArray,
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a [u8], opts: &DecodeOptions) -> Self {
        Decoder {
            input,
            pos: 0,
            depth: 0,
            max_depth: opts.max_depth,
        }
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Consume exactly `n` bytes or fail with `InsufficientData`.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(BinsonError::InsufficientData {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn read_mark(&mut self) -> Result<Mark> {
        let offset = self.pos;
        let byte = self.take(1)?[0];
        Mark::from_byte(byte)
            .ok_or_else(|| BinsonError::invalid(offset, format!("unknown mark {byte:#04x}")))
    }

    /// Read a value where the grammar allows nothing else.
    fn read_value(&mut self) -> Result<Value> {
        let offset = self.pos;
        match self.read_item()? {
            Item::Value(value) => Ok(value),
            Item::End => Err(BinsonError::invalid(offset, "unexpected end mark")),
            Item::EndArray => Err(BinsonError::invalid(offset, "unexpected end-array mark")),
        }
    }

    fn read_item(&mut self) -> Result<Item> {
        let offset = self.pos;
        let mark = self.read_mark()?;
        let value = match mark {
            Mark::End => return Ok(Item::End),
            Mark::EndArray => return Ok(Item::EndArray),
            Mark::Begin => {
                self.enter(offset)?;
                let obj = self.read_object_body()?;
                self.depth -= 1;
                Value::Object(obj)
            }
            Mark::BeginArray => {
                self.enter(offset)?;
                let arr = self.read_array_body()?;
                self.depth -= 1;
                Value::Array(arr)
            }
            _ => self.read_scalar(mark, offset)?,
        };
        Ok(Item::Value(value))
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(BinsonError::DepthLimitExceeded {
                offset,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Payload of a non-container mark whose byte has already been consumed.
    fn read_scalar(&mut self, mark: Mark, offset: usize) -> Result<Value> {
        let value = match mark {
            Mark::True => Value::Bool(true),
            Mark::False => Value::Bool(false),
            Mark::Double => Value::Double(f64::from_bits(u64::from_be_bytes(
                self.take_array::<8>()?,
            ))),
            Mark::Integer(width) => Value::Int(self.read_int(width)?),
            Mark::String(width) => {
                let len = self.read_len(width)?;
                let payload_offset = self.pos;
                let bytes = self.take(len)?;
                let s = std::str::from_utf8(bytes).map_err(|e| {
                    BinsonError::invalid(
                        payload_offset + e.valid_up_to(),
                        "string payload is not valid UTF-8",
                    )
                })?;
                Value::String(s.to_string())
            }
            Mark::Bytes(width) => {
                let len = self.read_len(width)?;
                Value::Bytes(self.take(len)?.to_vec())
            }
            Mark::Begin | Mark::End | Mark::BeginArray | Mark::EndArray => {
                return Err(BinsonError::invalid(offset, format!("{mark} is not a scalar")));
            }
        };
        Ok(value)
    }

    /// Little-endian signed integer of `width` bytes, sign-extended to 64 bits.
    fn read_int(&mut self, width: usize) -> Result<i64> {
        Ok(match width {
            1 => i8::from_le_bytes(self.take_array()?) as i64,
            2 => i16::from_le_bytes(self.take_array()?) as i64,
            4 => i32::from_le_bytes(self.take_array()?) as i64,
            _ => i64::from_le_bytes(self.take_array()?),
        })
    }

    /// Little-endian length prefix of `width` bytes.
    fn read_len(&mut self, width: usize) -> Result<usize> {
        Ok(match width {
            1 => self.take(1)?[0] as usize,
            2 => u16::from_le_bytes(self.take_array()?) as usize,
            _ => u32::from_le_bytes(self.take_array()?) as usize,
        })
    }

    fn read_array_body(&mut self) -> Result<Array> {
        let mut array = Array::new();
        loop {
            let offset = self.pos;
            match self.read_item()? {
                Item::Value(value) => array.push(value),
                Item::EndArray => return Ok(array),
                Item::End => {
                    return Err(BinsonError::invalid(offset, "end mark inside array"));
                }
            }
        }
    }

    fn read_object_body(&mut self) -> Result<Object> {
        let mut object = Object::new();
        let mut prev: Option<String> = None;
        loop {
            let key_offset = self.pos;
            let key = match self.read_item()? {
                Item::End => return Ok(object),
                Item::EndArray => {
                    return Err(BinsonError::invalid(key_offset, "end-array mark inside object"));
                }
                Item::Value(Value::String(key)) => key,
                Item::Value(other) => {
                    return Err(BinsonError::invalid(
                        key_offset,
                        format!("field name must be a string, found {}", other.kind()),
                    ));
                }
            };
            let value = self.read_value()?;

            if let Some(prev) = &prev {
                if key.as_bytes() <= prev.as_bytes() {
                    return Err(BinsonError::InvalidFieldName {
                        offset: key_offset,
                        key,
                    });
                }
            }
            object.insert(key.clone(), value);
            prev = Some(key);
        }
    }
}
