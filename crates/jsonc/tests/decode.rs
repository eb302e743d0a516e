//! Integration tests for the one-step decode wrappers.

mod common;

use common::{SMALL_JSONC, Small, UNCOMMENTED_JSON, with_invalid_utf8};
use jsonc::{Error, from_slice, from_str, has_comment_markers, sanitize};

#[test]
fn decodes_commented_fixture() {
    let small: Small = from_slice(SMALL_JSONC).expect("decode failed");
    common::assert_small_fields(&small);
}

#[test]
fn decodes_commented_fixture_as_str() {
    let text = std::str::from_utf8(SMALL_JSONC).expect("fixture is UTF-8");
    let small: Small = from_str(text).expect("decode failed");
    common::assert_small_fields(&small);
}

#[test]
fn fast_path_skips_sanitization() {
    // No '/' byte anywhere: the detector reports false, so the decoder must
    // receive the original bytes. Sanitize on the same input is the identity,
    // which is what makes the skip safe.
    assert!(!has_comment_markers(UNCOMMENTED_JSON));
    assert_eq!(
        sanitize(UNCOMMENTED_JSON).expect("sanitize failed"),
        UNCOMMENTED_JSON
    );
    let v: serde_json::Value = from_slice(UNCOMMENTED_JSON).expect("decode failed");
    assert_eq!(v["hello"], "world");
    assert_eq!(v["nested"]["ok"], true);
}

#[test]
fn invalid_utf8_propagates_without_decoding() {
    let err = from_slice::<Small>(&with_invalid_utf8(SMALL_JSONC)).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8));
}

#[test]
fn decoder_syntax_errors_relay_unchanged() {
    // Comment-free once stripped, but structurally broken JSON.
    let err = from_slice::<Small>(b"{ /* half */ \"foo\": ").unwrap_err();
    match err {
        Error::Json(e) => assert!(e.is_eof() || e.is_syntax()),
        Error::InvalidUtf8 => panic!("expected a relayed decoder error"),
    }
}

#[test]
fn type_mismatches_relay_unchanged() {
    #[derive(Debug, serde::Deserialize)]
    struct Strict {
        #[allow(dead_code)]
        foo: u32,
    }
    let err = from_str::<Strict>("{\"foo\": \"not a number\"}").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
