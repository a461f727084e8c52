// src/core/charset.rs
//! Bytes → text for uploaded reports.
//!
//! Tried in order:
//! 1. a byte-order mark (UTF-8, UTF-16LE/BE)
//! 2. a `charset=` declaration in a `<meta>` tag near the top, if the bytes
//!    decode cleanly under it
//! 3. strict UTF-8
//! 4. windows-1252, which maps every byte
//!
//! Input holding NUL characters after decoding is binary and refused.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::bytes::Regex;

use crate::{ReportError, Result};

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9._:\-]+)"#)
        .expect("charset pattern is valid")
});

/// Encoding named by a `<meta>` tag within the first [`SNIFF_LEN`] bytes.
/// UTF-16 labels are read as UTF-8, as browsers do for byte streams
/// without a BOM.
pub fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let caps = META_CHARSET_RE.captures(head)?;
    Encoding::for_label(&caps[1]).map(|e| e.output_encoding())
}

/// Decode a report. Returns the text and the encoding that was used.
pub fn decode(bytes: &[u8]) -> Result<(Cow<'_, str>, &'static Encoding)> {
    let (text, enc) = sniff(bytes);
    logd!("Decode: {} ({} bytes)", enc.name(), bytes.len());

    if text.contains('\0') {
        return Err(ReportError::Decode(format!(
            "NUL character in {}-decoded input; not an HTML report",
            enc.name()
        )));
    }
    Ok((text, enc))
}

fn sniff(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
        return (text, enc);
    }

    if let Some(enc) = declared_encoding(bytes) {
        if let Some(text) = enc.decode_without_bom_handling_and_without_replacement(bytes) {
            return (text, enc);
        }
        logd!("Decode: declared {} does not fit the bytes", enc.name());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), UTF_8);
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (text, WINDOWS_1252)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_wins() {
        let (text, enc) = decode(b"\xEF\xBB\xBF<p>\xC2\xB0</p>").unwrap();
        assert_eq!(enc, UTF_8);
        assert_eq!(text, "<p>°</p>");

        let utf16: Vec<u8> = [0xFF, 0xFE]
            .into_iter()
            .chain("<p>µ</p>".encode_utf16().flat_map(|u| u.to_le_bytes()))
            .collect();
        let (text, enc) = decode(&utf16).unwrap();
        assert_eq!(enc, encoding_rs::UTF_16LE);
        assert_eq!(text, "<p>µ</p>");
    }

    #[test]
    fn meta_declaration_is_honoured() {
        let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-15\"></head><body>\xA4</body></html>";
        assert_eq!(declared_encoding(html), Some(encoding_rs::ISO_8859_15));
        let (text, _) = decode(html).unwrap();
        assert!(text.contains('€'));
    }

    #[test]
    fn wrong_declaration_falls_through() {
        // declared UTF-8, actually windows-1252
        let html = b"<meta charset=\"utf-8\"><p>25\xB0C</p>";
        let (text, enc) = decode(html).unwrap();
        assert_eq!(enc, WINDOWS_1252);
        assert!(text.contains("25°C"));
    }

    #[test]
    fn plain_utf8_and_latin_fallback() {
        let (text, enc) = decode("<p>Grüße</p>".as_bytes()).unwrap();
        assert_eq!((text.as_ref(), enc), ("<p>Grüße</p>", UTF_8));

        let (text, enc) = decode(b"<p>Gr\xFC\xDFe</p>").unwrap();
        assert_eq!((text.as_ref(), enc), ("<p>Grüße</p>", WINDOWS_1252));
    }

    #[test]
    fn binary_is_refused() {
        assert!(matches!(decode(b"PK\x03\x04\x00\x00\x08\x00"), Err(ReportError::Decode(_))));
    }
}
