//! Error types for Binson decoding and the peripheral conversion layers.
//!
//! Encoding a well-formed [`Value`](crate::Value) tree cannot fail, so every
//! variant here originates either in the decoder or in one of the helper
//! modules (hex, JSON, serde bridge).

use thiserror::Error;

/// Errors that can occur while decoding Binson bytes or converting values.
#[derive(Error, Debug)]
pub enum BinsonError {
    /// Fewer bytes remain than the current mark's payload requires.
    #[error("insufficient data at offset {offset}: needed {needed} bytes, {available} available")]
    InsufficientData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Unknown mark, malformed UTF-8, or a value where the grammar forbids one.
    #[error("invalid data at offset {offset}: {reason}")]
    InvalidData { offset: usize, reason: String },

    /// An object key out of strict ascending byte order (or a duplicate).
    #[error("invalid field name {key:?} at offset {offset}: keys must be unique and ascending")]
    InvalidFieldName { offset: usize, key: String },

    /// Bytes left over after the single top-level value in strict mode.
    #[error("trailing data at offset {offset}: {remaining} bytes after top-level value")]
    TrailingData { offset: usize, remaining: usize },

    /// Nesting went deeper than `DecodeOptions::max_depth`.
    #[error("nesting depth exceeds limit of {limit} at offset {offset}")]
    DepthLimitExceeded { offset: usize, limit: usize },

    /// A hex fixture string could not be parsed.
    #[error("hex parse error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// JSON text could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that has no Binson representation (JSON null, `u64` beyond `i64`).
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// A serde bridge conversion failed (type mismatch, missing field, ...).
    #[error("conversion error: {0}")]
    Conversion(String),
}

/// Offset-free discriminant of [`BinsonError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InsufficientData,
    InvalidData,
    InvalidFieldName,
    TrailingData,
    DepthLimitExceeded,
    Hex,
    Json,
    Unsupported,
    Conversion,
}

impl BinsonError {
    /// The kind of this error, without offsets or messages.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinsonError::InsufficientData { .. } => ErrorKind::InsufficientData,
            BinsonError::InvalidData { .. } => ErrorKind::InvalidData,
            BinsonError::InvalidFieldName { .. } => ErrorKind::InvalidFieldName,
            BinsonError::TrailingData { .. } => ErrorKind::TrailingData,
            BinsonError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            BinsonError::Hex(_) => ErrorKind::Hex,
            BinsonError::Json(_) => ErrorKind::Json,
            BinsonError::Unsupported(_) => ErrorKind::Unsupported,
            BinsonError::Conversion(_) => ErrorKind::Conversion,
        }
    }

    /// Byte offset where a decode error was detected, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BinsonError::InsufficientData { offset, .. }
            | BinsonError::InvalidData { offset, .. }
            | BinsonError::InvalidFieldName { offset, .. }
            | BinsonError::TrailingData { offset, .. }
            | BinsonError::DepthLimitExceeded { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub(crate) fn invalid(offset: usize, reason: impl Into<String>) -> Self {
        BinsonError::InvalidData {
            offset,
            reason: reason.into(),
        }
    }
}

impl serde::ser::Error for BinsonError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        BinsonError::Conversion(msg.to_string())
    }
}

impl serde::de::Error for BinsonError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        BinsonError::Conversion(msg.to_string())
    }
}

/// Convenience alias used throughout binson-core.
pub type Result<T> = std::result::Result<T, BinsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_offset_for_decode_errors() {
        let err = BinsonError::TrailingData {
            offset: 2,
            remaining: 1,
        };
        assert_eq!(err.kind(), ErrorKind::TrailingData);
        assert_eq!(err.offset(), Some(2));
        assert_eq!(
            err.to_string(),
            "trailing data at offset 2: 1 bytes after top-level value"
        );
    }

    #[test]
    fn conversion_errors_have_no_offset() {
        let err = BinsonError::Unsupported("null".into());
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BinsonError>();
    }
}
