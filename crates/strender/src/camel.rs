//! UpperCamelCase conversion for identifier-like strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::locale::Locale;

/// A word start (string start or underscore, then a letter) followed by the
/// run of uppercase letters that belongs to it.
static UPPER_CAMEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:^|_)[\p{Uppercase}\p{Lowercase}])(\p{Uppercase}*)")
        .expect("upper camel pattern is valid")
});

/// Converts `snake_case`, `SHOUTY_CASE` or mixed input to `UpperCamelCase`.
///
/// Each word start is uppercased and the uppercase run after it lowercased, so
/// `HTTP_server` becomes `HttpServer`. Underscores before a word are dropped;
/// one at the very start of the string is kept. Text the pattern does not
/// match (digits, lowercase tails, stray underscores) is copied through.
///
/// A result of `Class` is returned as `class`, since generated accessors
/// named `getClass` collide with a reserved method.
pub fn to_upper_camel_case(s: &str, locale: &Locale) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;

    for caps in UPPER_CAMEL.captures_iter(s) {
        let (Some(whole), Some(head), Some(tail)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push_str(&s[last..whole.start()]);

        let head = if whole.start() == 0 {
            head.as_str()
        } else {
            head.as_str().trim_start_matches('_')
        };
        out.push_str(&locale.to_upper(head));
        out.push_str(&locale.to_lower(tail.as_str()));
        last = whole.end();
    }
    out.push_str(&s[last..]);

    if out == "Class" {
        return "class".to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camel(s: &str) -> String {
        to_upper_camel_case(s, &Locale::root())
    }

    #[test]
    fn snake_case_words_are_joined() {
        assert_eq!(camel("my_class_Name"), "MyClassName");
        assert_eq!(camel("user_id"), "UserId");
        assert_eq!(camel("a_b_c"), "ABC");
    }

    #[test]
    fn uppercase_runs_are_lowercased() {
        assert_eq!(camel("HTTP_SERVER"), "HttpServer");
        assert_eq!(camel("URL"), "Url");
    }

    #[test]
    fn unmatched_text_passes_through() {
        assert_eq!(camel("already"), "Already");
        assert_eq!(camel("x_1_y"), "X_1Y");
        assert_eq!(camel("trailing_"), "Trailing_");
        assert_eq!(camel("fooBar"), "FooBar");
        assert_eq!(camel(""), "");
    }

    #[test]
    fn leading_underscore_is_kept() {
        assert_eq!(camel("_private_field"), "_PrivateField");
    }

    #[test]
    fn class_is_rewritten() {
        assert_eq!(camel("Class"), "class");
        assert_eq!(camel("class"), "class");
        assert_eq!(camel("CLASS"), "class");
        assert_eq!(camel("class_name"), "ClassName");
    }

    #[test]
    fn locale_rules_apply() {
        let tr: Locale = "tr".parse().unwrap();
        assert_eq!(to_upper_camel_case("ip_ADI", &tr), "İpAdı");
    }
}
