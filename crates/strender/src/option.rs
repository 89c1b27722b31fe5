//! Named format options.

use std::fmt;

use crate::camel::to_upper_camel_case;
use crate::error::Result;
use crate::escape::{url_encode, xml_encode};
use crate::locale::Locale;
use crate::template::FormatTemplate;

/// A parsed format option.
///
/// Option names are matched exactly and are case-sensitive. Anything else is
/// a [`FormatOption::Template`].
///
/// | Name | Variant |
/// |------|---------|
/// | `upper` | [`Upper`](FormatOption::Upper) |
/// | `lower` | [`Lower`](FormatOption::Lower) |
/// | `cap` | [`Cap`](FormatOption::Cap) |
/// | `Camel` | [`Camel`](FormatOption::Camel) |
/// | `url-encode` | [`UrlEncode`](FormatOption::UrlEncode) |
/// | `xml-encode` | [`XmlEncode`](FormatOption::XmlEncode) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatOption<'a> {
    /// Uppercase every character.
    Upper,
    /// Lowercase every character.
    Lower,
    /// Uppercase the first character only.
    Cap,
    /// Convert to UpperCamelCase.
    Camel,
    /// `application/x-www-form-urlencoded` encoding.
    UrlEncode,
    /// XML entity and character-reference escaping.
    XmlEncode,
    /// printf-style template with the value as its one argument.
    Template(&'a str),
}

impl<'a> FormatOption<'a> {
    /// Classifies an option string. This never fails: unknown names are
    /// templates.
    pub fn parse(option: &'a str) -> Self {
        match option {
            "upper" => FormatOption::Upper,
            "lower" => FormatOption::Lower,
            "cap" => FormatOption::Cap,
            "Camel" => FormatOption::Camel,
            "url-encode" => FormatOption::UrlEncode,
            "xml-encode" => FormatOption::XmlEncode,
            template => FormatOption::Template(template),
        }
    }

    /// The option string this variant was parsed from.
    pub fn as_str(&self) -> &'a str {
        match self {
            FormatOption::Upper => "upper",
            FormatOption::Lower => "lower",
            FormatOption::Cap => "cap",
            FormatOption::Camel => "Camel",
            FormatOption::UrlEncode => "url-encode",
            FormatOption::XmlEncode => "xml-encode",
            FormatOption::Template(template) => *template,
        }
    }

    /// Applies the option to `value`.
    ///
    /// Only [`Template`](FormatOption::Template) can fail, when the template
    /// does not fit a single string argument.
    pub fn apply(&self, value: &str, locale: &Locale) -> Result<String> {
        Ok(match self {
            FormatOption::Upper => locale.to_upper(value),
            FormatOption::Lower => locale.to_lower(value),
            FormatOption::Cap => locale.capitalize(value),
            FormatOption::Camel => to_upper_camel_case(value, locale),
            FormatOption::UrlEncode => url_encode(value),
            FormatOption::XmlEncode => xml_encode(value),
            FormatOption::Template(template) => {
                FormatTemplate::parse(template)?.apply(value, locale)
            }
        })
    }
}

impl fmt::Display for FormatOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_options() {
        assert_eq!(FormatOption::parse("upper"), FormatOption::Upper);
        assert_eq!(FormatOption::parse("lower"), FormatOption::Lower);
        assert_eq!(FormatOption::parse("cap"), FormatOption::Cap);
        assert_eq!(FormatOption::parse("Camel"), FormatOption::Camel);
        assert_eq!(FormatOption::parse("url-encode"), FormatOption::UrlEncode);
        assert_eq!(FormatOption::parse("xml-encode"), FormatOption::XmlEncode);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(FormatOption::parse("Upper"), FormatOption::Template("Upper"));
        assert_eq!(FormatOption::parse("camel"), FormatOption::Template("camel"));
        assert_eq!(FormatOption::parse(""), FormatOption::Template(""));
    }

    #[test]
    fn display_round_trips_the_name() {
        for name in ["upper", "lower", "cap", "Camel", "url-encode", "xml-encode", "%s!"] {
            assert_eq!(FormatOption::parse(name).to_string(), name);
        }
    }

    #[test]
    fn apply_dispatches() {
        let root = Locale::root();
        assert_eq!(FormatOption::Cap.apply("word", &root).unwrap(), "Word");
        assert_eq!(
            FormatOption::Template("(%s)").apply("x", &root).unwrap(),
            "(x)"
        );
        assert!(FormatOption::Template("%d").apply("x", &root).is_err());
    }
}
