//! Cheap comment-presence pre-filter.
//!
//! Deliberately string-oblivious: it reports true for any `//` or `/*`
//! subsequence, even inside a string value such as a URL. False positives
//! only cost an unnecessary sanitize pass; a false negative would leave a
//! real comment in the decoder's input, so the detector never produces one.

/// Report whether the input contains a comment-opening sequence (`//` or
/// `/*`) anywhere, strings included.
///
/// Single forward pass over raw bytes, short-circuiting at the first match;
/// no allocation, no UTF-8 validation. `/` and `*` are ASCII, so UTF-8
/// continuation bytes can never match.
///
/// # Example
/// ```
/// assert!(jsonc::has_comment_markers(b"{} // trailing"));
/// // False positive by design: the marker is inside a string value.
/// assert!(jsonc::has_comment_markers(br#"{"url": "http://example.com"}"#));
/// assert!(!jsonc::has_comment_markers(br#"{"a": 1}"#));
/// ```
#[must_use]
pub fn has_comment_markers(data: &[u8]) -> bool {
    let mut prev_slash = false;
    for &b in data {
        if prev_slash && (b == b'/' || b == b'*') {
            return true;
        }
        prev_slash = b == b'/';
    }
    false
}
