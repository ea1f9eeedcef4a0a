//! Hex fixtures.
//!
//! Test vectors and CLI input are commonly written as hex strings. Parsing
//! is forgiving about presentation (surrounding whitespace, a `0x` prefix)
//! but not about content: odd digit counts and non-hex characters fail.

use crate::error::Result;

/// Lowercase hex, no prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Parse a hex string into bytes.
///
/// ```
/// use binson_core::hex::from_hex;
/// assert_eq!(from_hex(" 0x4041\n").unwrap(), [0x40, 0x41]);
/// assert!(from_hex("404").is_err());
/// ```
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(::hex::decode(digits)?)
}
