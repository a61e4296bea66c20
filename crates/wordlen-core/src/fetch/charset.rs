//! Body decoding: declared charset first, then `<meta charset>`, then UTF-8.
//!
//! Decoding never fails. Bytes the chosen encoding cannot map become U+FFFD,
//! which the tokenizer treats as a separator.

use encoding_rs::{Encoding, UTF_8};

/// How far into the body to look for a `<meta>` charset declaration.
const META_SNIFF_BYTES: usize = 1024;

/// Decode a page body to text using the best available charset hint.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(body))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced undecodable bytes in body");
    }
    text.into_owned()
}

/// `charset` parameter of a Content-Type value, unquoted.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

/// Charset from `<meta charset=..>` or `<meta http-equiv content="..; charset=..">`
/// near the start of the document.
fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let label: String = head[start..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins() {
        let text = decode_body(b"caf\xe9", Some("text/html; charset=iso-8859-1"));
        assert_eq!(text, "café");
    }

    #[test]
    fn quoted_and_cased_header_charset() {
        let text = decode_body(b"caf\xe9", Some("text/html; Charset=\"Windows-1252\""));
        assert_eq!(text, "café");
    }

    #[test]
    fn meta_charset_used_without_header_charset() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"></head><body>caf\xe9</body></html>";
        assert!(decode_body(body, Some("text/html")).contains("café"));

        let body = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">na\xefve";
        assert!(decode_body(body, None).ends_with("naïve"));
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(decode_body("żółw".as_bytes(), None), "żółw");
        assert_eq!(decode_body("żółw".as_bytes(), Some("text/plain")), "żółw");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let text = decode_body(b"caf\xe9 bonjour", Some("text/html; charset=utf-8"));
        assert_eq!(text, "caf\u{fffd} bonjour");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let text = decode_body("héllo".as_bytes(), Some("text/html; charset=x-made-up"));
        assert_eq!(text, "héllo");
    }

    #[test]
    fn charset_param_parsing() {
        assert_eq!(charset_param("text/html; charset=utf-8"), Some("utf-8"));
        assert_eq!(charset_param("text/html;foo=bar; charset = \"koi8-r\""), Some("koi8-r"));
        assert_eq!(charset_param("text/html"), None);
    }
}
