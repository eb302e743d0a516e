//! Deserialization wrappers: detect, sanitize if needed, delegate to
//! serde_json.
//!
//! The common case is configuration that carries no comments at all, so both
//! entry points run the cheap presence check first and hand the original
//! input to the decoder untouched when it reports nothing. Only when a
//! comment opener may be present does the full scanning pass run.

use serde::de::DeserializeOwned;

use crate::detect::has_comment_markers;
use crate::error::Error;
use crate::scanner::{sanitize, strip_comments};

/// Deserialize a value of type `T` from JSONC bytes.
///
/// If the input contains no `//` or `/*` sequence it is passed to
/// [`serde_json::from_slice`] unchanged, skipping the sanitize pass (and its
/// UTF-8 gate) entirely. Otherwise the input is sanitized first;
/// [`Error::InvalidUtf8`] is returned before the decoder ever runs, and
/// decoder errors are relayed unchanged.
///
/// # Example
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Config {
///     name: String,
///     retries: u32,
/// }
///
/// let data = br#"{
///     "name": "printer", // friendly name
///     /* hardware default */
///     "retries": 3
/// }"#;
/// let config: Config = jsonc::from_slice(data)?;
/// assert_eq!(config.name, "printer");
/// assert_eq!(config.retries, 3);
/// # Ok::<(), jsonc::Error>(())
/// ```
pub fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, Error> {
    if has_comment_markers(data) {
        let clean = sanitize(data)?;
        Ok(serde_json::from_slice(&clean)?)
    } else {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Deserialize a value of type `T` from JSONC text.
///
/// Same contract as [`from_slice`], minus the UTF-8 gate: a `&str` is valid
/// by construction, so only comment stripping can apply.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    if has_comment_markers(s.as_bytes()) {
        Ok(serde_json::from_str(&strip_comments(s))?)
    } else {
        Ok(serde_json::from_str(s)?)
    }
}
