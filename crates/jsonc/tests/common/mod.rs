//! Shared fixtures and helpers for `jsonc` integration tests.

#![allow(unreachable_pub)]
#![allow(dead_code)]

use serde::Deserialize;

/// A JSONC document exercising line comments, multi-line block comments,
/// and comment-like text embedded in string values.
pub const SMALL_JSONC: &[u8] = include_bytes!("../testdata/small.jsonc");

/// `SMALL_JSONC` with the comments removed by hand — the reference the
/// sanitized output is decoded against.
pub const SMALL_JSON: &[u8] = include_bytes!("../testdata/small.json");

/// A document with no `/` byte anywhere, so the decode fast path applies.
pub const UNCOMMENTED_JSON: &[u8] = include_bytes!("../testdata/uncommented.json");

/// Typed view of the small fixture.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Small {
    pub foo: String,
    pub baz: String,
    pub hello: String,
    pub url: String,
}

/// Assert that a decoded `Small` carries the fixture's expected values,
/// comment-like string payloads intact.
pub fn assert_small_fields(s: &Small) {
    assert_eq!(s.foo, "bar // comment inside a string");
    assert_eq!(s.baz, "qux /* comment block inside a string */");
    assert_eq!(s.hello, "world *//* /* // x */");
    assert_eq!(s.url, "http://example.com/path");
}

/// Append a byte that can never appear in valid UTF-8.
pub fn with_invalid_utf8(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.push(0xA5);
    out
}
