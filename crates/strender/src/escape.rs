//! URL and XML escaping.

use std::fmt::Write;

/// Encodes `s` as `application/x-www-form-urlencoded` over its UTF-8 bytes.
///
/// ASCII alphanumerics and `*`, `-`, `.`, `_` pass through, a space becomes
/// `+`, and every other byte becomes `%XX` with uppercase hex digits.
///
/// ```rust
/// use strender::url_encode;
///
/// assert_eq!(url_encode("a b&c"), "a+b%26c");
/// assert_eq!(url_encode("é"), "%C3%A9");
/// ```
pub fn url_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Escapes `s` for XML text and attribute content.
///
/// `&`, `<` and `>` become entity references. Tab, newline and carriage
/// return are kept. Any other control character, and anything outside
/// printable ASCII, becomes a decimal character reference, so the output is
/// always pure ASCII.
///
/// ```rust
/// use strender::xml_encode;
///
/// assert_eq!(xml_encode("<a>&"), "&lt;a&gt;&amp;");
/// assert_eq!(xml_encode("café"), "caf&#233;");
/// ```
pub fn xml_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < ' ' || c > '~' => {
                // Writing into a String cannot fail.
                let _ = write!(out, "&#{};", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encode_form_rules() {
        assert_eq!(url_encode("a b&c"), "a+b%26c");
        assert_eq!(url_encode("A-z_0.9*"), "A-z_0.9*");
        assert_eq!(url_encode("a+b=c/d?"), "a%2Bb%3Dc%2Fd%3F");
        assert_eq!(url_encode("~"), "%7E");
        assert_eq!(url_encode(""), "");
    }

    #[test]
    fn url_encode_multibyte_utf8() {
        assert_eq!(url_encode("日本"), "%E6%97%A5%E6%9C%AC");
        assert_eq!(url_encode("\u{1F600}"), "%F0%9F%98%80");
    }

    #[test]
    fn xml_encode_entities() {
        assert_eq!(xml_encode("<a>&"), "&lt;a&gt;&amp;");
        assert_eq!(xml_encode("\"quoted\" 'text'"), "\"quoted\" 'text'");
    }

    #[test]
    fn xml_encode_control_characters() {
        assert_eq!(xml_encode("\u{1}"), "&#1;");
        assert_eq!(xml_encode("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(xml_encode("\u{0}\u{1f}"), "&#0;&#31;");
        assert_eq!(xml_encode("\u{7f}"), "&#127;");
    }

    #[test]
    fn xml_encode_non_ascii_uses_code_points() {
        assert_eq!(xml_encode("é"), "&#233;");
        assert_eq!(xml_encode("\u{1F600}"), "&#128512;");
        assert_eq!(xml_encode("~ok"), "~ok");
    }
}
