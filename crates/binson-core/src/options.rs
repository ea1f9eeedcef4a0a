//! Decoder configuration.

/// Default ceiling on object/array nesting accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for [`decode_with`](crate::decode_with).
///
/// The defaults give strict decoding: trailing bytes are rejected and nesting
/// deeper than [`DEFAULT_MAX_DEPTH`] fails with `DepthLimitExceeded`.
///
/// ```
/// use binson_core::{decode_with, DecodeOptions, Value};
/// let opts = DecodeOptions::default().allow_trailing(true);
/// assert_eq!(decode_with(&[0x44, 0x99], &opts).unwrap(), Value::Bool(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested objects/arrays. Each container level counts once.
    pub max_depth: usize,
    /// Accept and ignore bytes after the top-level value.
    pub allow_trailing: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }
}
