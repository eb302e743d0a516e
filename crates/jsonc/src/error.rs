//! Error type shared by the sanitizer and the deserialization wrappers.

use thiserror::Error;

/// Errors returned by this crate.
///
/// [`Error::InvalidUtf8`] is the only condition originating here; it is
/// raised once, by the encoding gate that runs before the scanner, never
/// mid-scan. Decoder failures are relayed transparently as [`Error::Json`]
/// so serde_json's own error semantics (message, line/column) survive
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not valid UTF-8 text.
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// The sanitized input failed to decode as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True if this is the UTF-8 validation failure rather than a relayed
    /// decoder error.
    #[must_use]
    pub fn is_invalid_utf8(&self) -> bool {
        matches!(self, Error::InvalidUtf8)
    }
}
