//! Character encoding detection and transcoding.
//!
//! The byte-input facade accepts raw HTML bytes, sniffs the charset
//! (BOM first, then meta declarations in the document head) and decodes
//! to UTF-8 before parsing. Decoding is lossy: bytes that are invalid in
//! the detected encoding become the Unicode replacement character
//! instead of failing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// How far into the document charset declarations are looked for.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">`.
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("META_CHARSET_RE regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+content\s*=\s*["'][^"']*;\s*charset\s*=\s*([^"'\s;>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET_RE regex")
});

/// Detect the character encoding of an HTML byte stream.
///
/// Order of precedence: byte-order mark, `<meta charset>`, `http-equiv`
/// content-type declaration, UTF-8 as the web default. Only the first
/// 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    for re in [&META_CHARSET_RE, &HTTP_EQUIV_CHARSET_RE] {
        if let Some(label) = re.captures(head).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode HTML bytes to a UTF-8 string using the detected encoding.
///
/// Never fails; undecodable bytes are replaced with U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
