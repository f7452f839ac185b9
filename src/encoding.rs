//! Character encoding detection and transcoding.
//!
//! Response bodies are decoded to UTF-8 before parsing. An HTTP
//! `Content-Type` charset wins when present; otherwise the head of the
//! document is scanned for `<meta>` charset declarations; UTF-8 is the
//! fallback. Decoding is lossy: invalid sequences become U+FFFD, never an
//! error.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Bytes examined when scanning for a meta charset declaration.
const META_SCAN_LIMIT: usize = 1024;

/// Pick the encoding for a response body.
///
/// Priority order:
/// 1. `header_charset`, the charset parameter of the HTTP `Content-Type`
///    header, when the caller has one.
/// 2. A `<meta charset>` or `http-equiv` declaration within the first
///    kilobyte of the document.
/// 3. UTF-8, the web default.
///
/// Unknown charset labels fall through to the next source.
#[must_use]
pub fn detect_encoding(bytes: &[u8], header_charset: Option<&str>) -> &'static Encoding {
    if let Some(label) = header_charset {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            return encoding;
        }
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_SCAN_LIMIT)]);
    for pattern in [&META_CHARSET, &HTTP_EQUIV_CHARSET] {
        if let Some(label) = pattern.captures(&head).and_then(|caps| caps.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement character
/// rather than reported as errors.
#[must_use]
pub fn decode_html(bytes: &[u8], header_charset: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, header_charset);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_meta_declaration() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        let encoding = detect_encoding(html, Some("ISO-8859-1"));
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG spec.
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn unknown_header_charset_falls_back_to_meta() {
        let html = br#"<html><head><meta charset="windows-1252"></head><body></body></html>"#;
        let encoding = detect_encoding(html, Some("bogus-charset"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn detects_meta_charset_declaration() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn detects_http_equiv_declaration() {
        let html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"></head><body></body></html>"#;
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8_without_any_declaration() {
        let html = b"<html><body>Test</body></html>";
        assert_eq!(detect_encoding(html, None), UTF_8);
    }

    #[test]
    fn decodes_latin1_body() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let text = decode_html(html, None);
        assert!(text.contains("Caf\u{e9}"));
    }

    #[test]
    fn utf8_passthrough_is_lossless() {
        let html = "<html><body>Hello, World!</body></html>";
        assert_eq!(decode_html(html.as_bytes(), None), html);
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let html = b"<html><body>Test \xFF\xFE Invalid</body></html>";
        let text = decode_html(html, None);
        assert!(text.contains("Test"));
        assert!(text.contains("Invalid"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn meta_scan_ignores_declarations_past_the_limit() {
        let mut html = Vec::from(&b"<html><head>"[..]);
        html.extend(std::iter::repeat(b' ').take(META_SCAN_LIMIT));
        html.extend_from_slice(b"<meta charset=\"ISO-8859-1\"></head><body></body></html>");
        assert_eq!(detect_encoding(&html, None), UTF_8);
    }
}
