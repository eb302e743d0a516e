//! Strip comments from JSON-with-Comments (JSONC) and decode the result.
//!
//! JSONC is plain JSON plus `//` line comments and `/* */` block comments —
//! convenient for hand-edited configuration files, but rejected by strict
//! JSON parsers. This crate removes the comments in a single scanning pass
//! while leaving string-literal content (URLs, escaped quotes, comment-like
//! substrings) byte-for-byte intact, then hands the clean text to serde_json.
//!
//! The main entry points are [`from_slice`] / [`from_str`] for one-step
//! decoding, [`sanitize`] for the stripping pass alone, and
//! [`has_comment_markers`] for the cheap pre-check that lets already-clean
//! input skip the pass entirely.
//!
//! ```
//! let data = br#"{
//!     // server settings
//!     "host": "http://example.com", /* comment-like text in the
//!                                      URL above is left alone */
//!     "port": 8080
//! }"#;
//! let v: serde_json::Value = jsonc::from_slice(data)?;
//! assert_eq!(v["host"], "http://example.com");
//! assert_eq!(v["port"], 8080);
//! # Ok::<(), jsonc::Error>(())
//! ```

#![warn(missing_docs)]

/// Deserialization wrappers over serde_json.
pub mod de;
/// Comment-presence pre-filter.
pub mod detect;
/// Error type.
pub mod error;
/// The comment-stripping scanner.
pub mod scanner;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the common entry points. The module paths remain
// available.

pub use de::{from_slice, from_str};
pub use detect::has_comment_markers;
pub use error::Error;
pub use scanner::{sanitize, strip_comments};
