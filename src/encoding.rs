//! Character encoding detection for pages handed over as raw bytes.
//!
//! A byte-order mark wins, then a charset declared in the first kilobyte
//! (`<meta charset>` or `http-equiv="Content-Type"`), then UTF-8. Decoding
//! is lossy: malformed sequences become U+FFFD instead of failing the page.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});

static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Where the chosen encoding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    ByteOrderMark,
    MetaDeclaration,
    Default,
}

/// Pick the encoding for `bytes` and report how it was chosen.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, EncodingSource) {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return (encoding, EncodingSource::ByteOrderMark);
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map_or((UTF_8, EncodingSource::Default), |encoding| {
            (encoding, EncodingSource::MetaDeclaration)
        })
}

/// Charset label declared in markup, `<meta charset>` taking precedence.
fn declared_charset(head: &str) -> Option<String> {
    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .find_map(|re| re.captures(head))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode page bytes to a UTF-8 string.
///
/// # Example
///
/// ```rust
/// use pagelift::encoding::transcode_to_utf8;
///
/// let page = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(page).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let (encoding, source) = detect_encoding(bytes);
    tracing::trace!(encoding = encoding.name(), ?source, "decoding page bytes");

    // decode() strips a matching BOM and replaces malformed sequences.
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
