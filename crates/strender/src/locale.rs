//! Locale identifiers and locale-sensitive case mapping.
//!
//! A [`Locale`] is a parsed language tag. Only the primary language and the
//! region are kept; script and variant subtags are validated and dropped,
//! since no case rule depends on them.
//!
//! Case conversion follows the Unicode default mappings (what [`str::to_uppercase`]
//! and [`str::to_lowercase`] do) except for the languages with tailored rules:
//!
//! | Language | Rule |
//! |----------|------|
//! | Turkish (`tr`), Azerbaijani (`az`) | `i` ↔ `İ` and `ı` ↔ `I` |
//! | Lithuanian (`lt`) | keeps the dot on `i`/`j` under accents |
//!
//! ```rust
//! use strender::Locale;
//!
//! let tr: Locale = "tr-TR".parse().unwrap();
//! assert_eq!(tr.to_upper("istanbul"), "İSTANBUL");
//!
//! let en: Locale = "en_US".parse().unwrap();
//! assert_eq!(en.to_upper("istanbul"), "ISTANBUL");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

const COMBINING_DOT_ABOVE: char = '\u{307}';

/// A language tag that selects case-conversion rules.
///
/// Parsing accepts BCP 47 tags (`en-US`), POSIX names (`en_US.UTF-8`), and the
/// root aliases `""`, `und`, `root`, `C` and `POSIX`. The language is stored
/// lowercased and the region uppercased, so equal locales compare equal
/// regardless of how they were spelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseRules {
    Standard,
    Turkic,
    Lithuanian,
}

impl Locale {
    /// The root locale: language-neutral, default Unicode case mappings.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a locale tag. Equivalent to `tag.parse()`.
    pub fn new(tag: &str) -> Result<Self> {
        tag.parse()
    }

    /// Lowercased primary language subtag, empty for the root locale.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercased region subtag, if the tag carried one.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether this is the root (language-neutral) locale.
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    fn case_rules(&self) -> CaseRules {
        match self.language.as_str() {
            "tr" | "tur" | "az" | "aze" => CaseRules::Turkic,
            "lt" | "lit" => CaseRules::Lithuanian,
            _ => CaseRules::Standard,
        }
    }

    /// Uppercases every character of `s` using this locale's rules.
    pub fn to_upper(&self, s: &str) -> String {
        match self.case_rules() {
            CaseRules::Standard => s.to_uppercase(),
            CaseRules::Turkic => s.replace('i', "\u{130}").to_uppercase(),
            CaseRules::Lithuanian => remove_dot_after_soft_dotted(s).to_uppercase(),
        }
    }

    /// Lowercases every character of `s` using this locale's rules.
    pub fn to_lower(&self, s: &str) -> String {
        match self.case_rules() {
            CaseRules::Standard => s.to_lowercase(),
            CaseRules::Turkic => s
                .replace("I\u{307}", "i")
                .replace('I', "\u{131}")
                .replace('\u{130}', "i")
                .to_lowercase(),
            CaseRules::Lithuanian => add_lithuanian_dots(s).to_lowercase(),
        }
    }

    /// Uppercases the first character of `s` and leaves the rest untouched.
    ///
    /// The first character may expand (`ß` becomes `SS`).
    pub fn capitalize(&self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                let mut buf = [0u8; 4];
                let mut out = self.to_upper(first.encode_utf8(&mut buf));
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(tag: &str) -> Result<Self> {
        let invalid = || FormatError::InvalidLocale(tag.to_string());

        // POSIX names may carry a codeset and a modifier: en_US.UTF-8@euro
        let core = tag.trim().split(['.', '@']).next().unwrap_or_default();
        if core.is_empty()
            || core.eq_ignore_ascii_case("und")
            || core.eq_ignore_ascii_case("root")
            || core == "C"
            || core == "POSIX"
        {
            return Ok(Self::root());
        }

        let mut subtags = core.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=8).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            let is_region = (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()));
            if region.is_none() && is_region {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("und");
        }
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Locale {
    type Error = FormatError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

fn is_soft_dotted(c: char) -> bool {
    matches!(
        c,
        'i' | 'j' | '\u{12f}' | '\u{268}' | '\u{456}' | '\u{458}' | '\u{1e2d}' | '\u{1ecb}'
    )
}

fn is_combining(c: char) -> bool {
    matches!(c, '\u{300}'..='\u{36f}')
}

// Marks in U+0300..U+0314 all sit above the base letter.
fn is_combining_above(c: char) -> bool {
    matches!(c, '\u{300}'..='\u{314}')
}

/// Drops U+0307 after a soft-dotted letter; uppercase letters carry no dot.
fn remove_dot_after_soft_dotted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_soft_dotted = false;
    for c in s.chars() {
        if c == COMBINING_DOT_ABOVE && after_soft_dotted {
            continue;
        }
        after_soft_dotted = if is_soft_dotted(c) {
            true
        } else if is_combining_above(c) {
            false
        } else {
            is_combining(c) && after_soft_dotted
        };
        out.push(c);
    }
    out
}

/// Keeps the dot on lowercase `i`/`j`/`į` when an accent sits above them.
fn add_lithuanian_dots(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{cc}' => out.push_str("i\u{307}\u{300}"),
            '\u{cd}' => out.push_str("i\u{307}\u{301}"),
            '\u{128}' => out.push_str("i\u{307}\u{303}"),
            'I' | 'J' | '\u{12e}' if chars.peek().is_some_and(|&next| is_combining_above(next)) => {
                out.extend(c.to_lowercase());
                out.push(COMBINING_DOT_ABOVE);
            }
            _ => out.push(c),
        }
    }
    out
}
