//! printf-style format templates with a single string argument.
//!
//! Any option string that is not a named format option is treated as a
//! template and the value is substituted into it:
//!
//! ```text
//! %[argument_index$][flags][width][.precision]conversion
//! ```
//!
//! | Conversion | Output |
//! |------------|--------|
//! | `s` / `S` | the value, `S` uppercased with the locale |
//! | `b` / `B` | `true` / `TRUE` (the argument is never null) |
//! | `h` / `H` | the value's 32-bit string hash in hex (`"x"` gives `78`) |
//! | `%` | a literal `%` |
//! | `n` | a newline |
//!
//! Width pads with spaces on the left, or on the right with the `-` flag.
//! Precision truncates the value to that many characters first. Widths and
//! precisions count characters, not bytes. Widths above [`MAX_WIDTH`] are
//! rejected.
//!
//! There is exactly one argument. `%1$s` names it explicitly and `%<s` reuses
//! it. A second plain directive such as `%s %s` is an error, as is any
//! numeric conversion (`%d`, `%f`, ...).
//!
//! ```rust
//! use strender::{FormatTemplate, Locale};
//!
//! let template = FormatTemplate::parse("[%-6s]").unwrap();
//! assert_eq!(template.apply("ab", &Locale::root()), "[ab    ]");
//! ```

use crate::error::{FormatError, Result};
use crate::locale::Locale;

/// Largest accepted field width.
pub const MAX_WIDTH: usize = 1 << 16;

/// A parsed format template, ready to be applied to any number of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value {
        uppercase: bool,
        padding: Padding,
        precision: Option<usize>,
    },
    Boolean {
        uppercase: bool,
        padding: Padding,
        precision: Option<usize>,
    },
    Hash {
        uppercase: bool,
        padding: Padding,
        precision: Option<usize>,
    },
    Percent(Padding),
    Newline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Padding {
    width: Option<usize>,
    left_justify: bool,
}

impl Padding {
    fn apply(self, text: String) -> String {
        let Some(width) = self.width else {
            return text;
        };
        let len = text.chars().count();
        if len >= width {
            return text;
        }
        let fill = " ".repeat(width - len);
        if self.left_justify {
            text + &fill
        } else {
            fill + &text
        }
    }
}

/// The pieces of a single `%` directive before validation.
#[derive(Debug, Default)]
struct Directive {
    index: Option<usize>,
    flags: String,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl FormatTemplate {
    /// Parses `template`, checking every directive against a single string
    /// argument.
    pub fn parse(template: &str) -> Result<Self> {
        let mut parser = Parser {
            template,
            rest: template,
            ordinary_seen: false,
            has_previous: false,
        };
        let mut segments = Vec::new();

        while let Some(pos) = parser.rest.find('%') {
            if pos > 0 {
                segments.push(Segment::Literal(parser.rest[..pos].to_string()));
            }
            parser.rest = &parser.rest[pos + 1..];
            let directive = parser.directive()?;
            segments.push(parser.segment(directive)?);
        }
        if !parser.rest.is_empty() {
            segments.push(Segment::Literal(parser.rest.to_string()));
        }

        Ok(FormatTemplate { segments })
    }

    /// Substitutes `value` into the template.
    pub fn apply(&self, value: &str, locale: &Locale) -> String {
        let mut out = String::with_capacity(value.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value {
                    uppercase,
                    padding,
                    precision,
                } => out.push_str(&render_text(
                    value, *uppercase, *padding, *precision, locale,
                )),
                Segment::Boolean {
                    uppercase,
                    padding,
                    precision,
                } => out.push_str(&render_text(
                    "true", *uppercase, *padding, *precision, locale,
                )),
                Segment::Hash {
                    uppercase,
                    padding,
                    precision,
                } => out.push_str(&render_text(
                    &format!("{:x}", string_hash(value)),
                    *uppercase,
                    *padding,
                    *precision,
                    locale,
                )),
                Segment::Percent(padding) => out.push_str(&padding.apply("%".to_string())),
                Segment::Newline => out.push('\n'),
            }
        }
        out
    }
}

fn render_text(
    text: &str,
    uppercase: bool,
    padding: Padding,
    precision: Option<usize>,
    locale: &Locale,
) -> String {
    let text = match precision {
        Some(max) => text.chars().take(max).collect(),
        None => text.to_string(),
    };
    let text = if uppercase {
        locale.to_upper(&text)
    } else {
        text
    };
    padding.apply(text)
}

/// `h = 31 * h + unit` over the UTF-16 code units, wrapping on overflow.
fn string_hash(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

struct Parser<'a> {
    template: &'a str,
    rest: &'a str,
    ordinary_seen: bool,
    has_previous: bool,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: impl Into<String>) -> FormatError {
        FormatError::template(self.template, reason)
    }

    fn take_digits(&mut self) -> Result<Option<usize>> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Ok(None);
        }
        let digits = &self.rest[..end];
        let number = digits
            .parse::<usize>()
            .map_err(|_| self.error(format!("number '{}' is too large", digits)))?;
        self.rest = &self.rest[end..];
        Ok(Some(number))
    }

    /// Reads one directive; `rest` starts just after the `%`.
    fn directive(&mut self) -> Result<Directive> {
        let mut directive = Directive::default();

        let checkpoint = self.rest;
        if let Some(index) = self.take_digits()? {
            if let Some(after) = self.rest.strip_prefix('$') {
                directive.index = Some(index);
                self.rest = after;
            } else {
                self.rest = checkpoint;
            }
        }

        let flags_end = self
            .rest
            .find(|c: char| !"-#+ 0,(<".contains(c))
            .unwrap_or(self.rest.len());
        directive.flags = self.rest[..flags_end].to_string();
        self.rest = &self.rest[flags_end..];

        directive.width = self.take_digits()?;
        if let Some(width) = directive.width.filter(|&w| w > MAX_WIDTH) {
            return Err(self.error(format!(
                "width {} exceeds the maximum of {}",
                width, MAX_WIDTH
            )));
        }

        if let Some(after) = self.rest.strip_prefix('.') {
            self.rest = after;
            directive.precision = Some(
                self.take_digits()?
                    .ok_or_else(|| self.error("precision requires digits after '.'"))?,
            );
        }

        let mut chars = self.rest.chars();
        directive.conversion = chars
            .next()
            .ok_or_else(|| self.error("template ends inside a directive"))?;
        self.rest = chars.as_str();

        Ok(directive)
    }

    fn segment(&mut self, directive: Directive) -> Result<Segment> {
        let conversion = directive.conversion;
        match conversion {
            's' | 'S' | 'b' | 'B' | 'h' | 'H' => {
                let relative = directive.flags.contains('<');
                let left_justify = directive.flags.contains('-');
                if let Some(flag) = directive.flags.chars().find(|&c| c != '-' && c != '<') {
                    return Err(self.error(format!(
                        "flag '{}' is not valid for conversion '{}'",
                        flag, conversion
                    )));
                }
                if left_justify && directive.width.is_none() {
                    return Err(self.error("flag '-' requires a width"));
                }
                self.claim_argument(relative, directive.index)?;

                let padding = Padding {
                    width: directive.width,
                    left_justify,
                };
                let uppercase = conversion.is_ascii_uppercase();
                let precision = directive.precision;
                Ok(match conversion.to_ascii_lowercase() {
                    's' => Segment::Value {
                        uppercase,
                        padding,
                        precision,
                    },
                    'b' => Segment::Boolean {
                        uppercase,
                        padding,
                        precision,
                    },
                    _ => Segment::Hash {
                        uppercase,
                        padding,
                        precision,
                    },
                })
            }
            '%' => {
                if directive.index.is_some() || directive.precision.is_some() {
                    return Err(self.error("'%%' takes no argument index or precision"));
                }
                if let Some(flag) = directive.flags.chars().find(|&c| c != '-') {
                    return Err(self.error(format!("flag '{}' is not valid for '%%'", flag)));
                }
                let left_justify = directive.flags.contains('-');
                if left_justify && directive.width.is_none() {
                    return Err(self.error("flag '-' requires a width"));
                }
                Ok(Segment::Percent(Padding {
                    width: directive.width,
                    left_justify,
                }))
            }
            'n' => {
                if directive.index.is_some()
                    || !directive.flags.is_empty()
                    || directive.width.is_some()
                    || directive.precision.is_some()
                {
                    return Err(self.error("'%n' takes no flags, width or precision"));
                }
                Ok(Segment::Newline)
            }
            other => Err(self.error(format!(
                "conversion '{}' cannot format a string argument",
                other
            ))),
        }
    }

    /// Checks that a directive resolves to the one available argument.
    fn claim_argument(&mut self, relative: bool, index: Option<usize>) -> Result<()> {
        if relative {
            if !self.has_previous {
                return Err(self.error("'<' used before any argument"));
            }
            return Ok(());
        }
        match index {
            Some(0) => return Err(self.error("argument index 0 is not valid")),
            Some(1) => {}
            Some(n) => {
                return Err(self.error(format!("missing argument {}, only one is given", n)))
            }
            None if self.ordinary_seen => {
                return Err(self.error("missing argument, only one is given"))
            }
            None => self.ordinary_seen = true,
        }
        self.has_previous = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(template: &str, value: &str) -> String {
        FormatTemplate::parse(template)
            .unwrap()
            .apply(value, &Locale::root())
    }

    fn reason(template: &str) -> String {
        match FormatTemplate::parse(template).unwrap_err() {
            FormatError::Template { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plain_substitution() {
        assert_eq!(apply("%s!", "x"), "x!");
        assert_eq!(apply("<%s>", "tag"), "<tag>");
        assert_eq!(apply("no directives", "x"), "no directives");
        assert_eq!(apply("", "x"), "");
    }

    #[test]
    fn width_and_justification() {
        assert_eq!(apply("%5s|", "ab"), "   ab|");
        assert_eq!(apply("%-4s|", "ab"), "ab  |");
        assert_eq!(apply("%2s", "abcdef"), "abcdef");
        assert_eq!(apply("%4s", "äö"), "  äö");
    }

    #[test]
    fn precision_truncates_characters() {
        assert_eq!(apply("%.3s", "abcdef"), "abc");
        assert_eq!(apply("%-5.2s|", "abcdef"), "ab   |");
        assert_eq!(apply("%.1s", "日本"), "日");
        assert_eq!(apply("%.0s", "abc"), "");
    }

    #[test]
    fn uppercase_conversion_uses_locale() {
        assert_eq!(apply("%S", "hi"), "HI");
        let tr: Locale = "tr".parse().unwrap();
        let template = FormatTemplate::parse("%S").unwrap();
        assert_eq!(template.apply("ti", &tr), "Tİ");
    }

    #[test]
    fn argument_indexes() {
        assert_eq!(apply("%1$s-%1$s", "a"), "a-a");
        assert_eq!(apply("%s/%<s", "a"), "a/a");
        assert_eq!(apply("%s %1$S", "a"), "a A");
    }

    #[test]
    fn percent_newline_and_boolean() {
        assert_eq!(apply("100%%", "x"), "100%");
        assert_eq!(apply("%-3%|", "x"), "%  |");
        assert_eq!(apply("a%nb", "x"), "a\nb");
        assert_eq!(apply("%b %B", "x"), "true TRUE");
    }

    #[test]
    fn hash_conversion() {
        assert_eq!(apply("%h", "x"), "78");
        assert_eq!(apply("%H", "hello"), "5E918D2");
        assert_eq!(apply("%h", ""), "0");
        assert_eq!(apply("%-4h|", "x"), "78  |");
        // wraps past 32 bits
        assert_eq!(apply("%h", "Aa Bb Cc Dd"), format!("{:x}", string_hash("Aa Bb Cc Dd")));
        assert_eq!(string_hash("polygenelubricants"), 0x8000_0000);
    }

    #[test]
    fn rejects_oversized_widths() {
        assert!(FormatTemplate::parse("%18446744073709551615s").is_err());
        assert!(reason("%4000000000s").contains("exceeds the maximum"));
        assert!(reason("%-70000%").contains("exceeds the maximum"));
        assert!(reason("%99999999999999999999999s").contains("too large"));
        assert_eq!(apply(&format!("%{}s", MAX_WIDTH), "x").len(), MAX_WIDTH);
    }

    #[test]
    fn rejects_numeric_conversions() {
        assert!(reason("%d").contains("conversion 'd'"));
        assert!(reason("%.2f").contains("conversion 'f'"));
        assert!(reason("%tY").contains("conversion 't'"));
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(reason("%s %s").contains("missing argument"));
        assert!(reason("%2$s").contains("missing argument 2"));
        assert!(reason("%0$s").contains("index 0"));
        assert!(reason("%<s").contains("'<'"));
    }

    #[test]
    fn rejects_bad_flags_and_syntax() {
        assert!(reason("%05s").contains("flag '0'"));
        assert!(reason("%#s").contains("flag '#'"));
        assert!(reason("%-s").contains("requires a width"));
        assert!(reason("%.s").contains("precision"));
        assert!(reason("50%").contains("ends inside"));
        assert!(reason("%3n").contains("'%n'"));
        assert!(reason("%.2%").contains("'%%'"));
    }
}
