//! The string attribute renderer.
//!
//! A template engine calls an [`AttributeRenderer`] whenever it prints a value
//! with a format option attached. [`StringRenderer`] is the implementation for
//! strings. It dispatches on the option name (see [`FormatOption`]) and treats
//! anything it does not recognize as a format template.

use crate::config::RendererConfig;
use crate::error::Result;
use crate::locale::Locale;
use crate::option::FormatOption;

/// Renders attribute values with an optional format option.
///
/// Implementations hold no mutable state and can be shared across threads.
pub trait AttributeRenderer: Send + Sync {
    /// Formats `value`, returning it unchanged when `option` is `None`.
    fn render(&self, value: &str, option: Option<&str>, locale: &Locale) -> String;
}

/// Formats `value` with `option` under `locale`.
///
/// A template that cannot take a single string argument (`%d`, `%s %s`)
/// leaves `value` unchanged and logs a warning. Use [`try_format`] to get
/// the error instead.
///
/// ```rust
/// use strender::{format, Locale};
///
/// let en: Locale = "en".parse().unwrap();
/// assert_eq!(format("Hello", None, &en), "Hello");
/// assert_eq!(format("Hello", Some("upper"), &en), "HELLO");
/// assert_eq!(format("my_class_Name", Some("Camel"), &en), "MyClassName");
/// assert_eq!(format("x", Some("%s!"), &en), "x!");
/// ```
pub fn format(value: &str, option: Option<&str>, locale: &Locale) -> String {
    match try_format(value, option, locale) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(
                option = option.unwrap_or_default(),
                error = %err,
                "format template not applied, value left unchanged"
            );
            value.to_string()
        }
    }
}

/// Like [`format`], but reports unusable templates as errors.
pub fn try_format(value: &str, option: Option<&str>, locale: &Locale) -> Result<String> {
    let Some(option) = option else {
        return Ok(value.to_string());
    };
    let option = FormatOption::parse(option);
    if let FormatOption::Template(template) = option {
        tracing::debug!(template, locale = %locale, "applying format template");
    }
    option.apply(value, locale)
}

/// The [`AttributeRenderer`] for strings.
///
/// The renderer carries a default locale. [`AttributeRenderer::render`] always
/// uses the locale it is given; the default is for callers that have none,
/// such as the template filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringRenderer {
    locale: Locale,
}

impl StringRenderer {
    /// Creates a renderer with the root locale as its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with `locale` as its default.
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// Creates a renderer from loaded configuration.
    pub fn from_config(config: &RendererConfig) -> Self {
        Self::with_locale(config.locale.clone())
    }

    /// Creates a renderer from a YAML configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::from_config(&RendererConfig::from_yaml(yaml)?))
    }

    /// The default locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Formats with the default locale.
    pub fn format(&self, value: &str, option: Option<&str>) -> String {
        format(value, option, &self.locale)
    }

    /// Formats with the default locale, reporting unusable templates.
    pub fn try_format(&self, value: &str, option: Option<&str>) -> Result<String> {
        try_format(value, option, &self.locale)
    }
}

impl AttributeRenderer for StringRenderer {
    fn render(&self, value: &str, option: Option<&str>, locale: &Locale) -> String {
        format(value, option, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    fn en() -> Locale {
        "en".parse().unwrap()
    }

    #[test]
    fn no_option_returns_value() {
        assert_eq!(format("Hello", None, &en()), "Hello");
        assert_eq!(format("", None, &en()), "");
    }

    #[test]
    fn named_options() {
        let en = en();
        assert_eq!(format("Hello", Some("upper"), &en), "HELLO");
        assert_eq!(format("Hello", Some("lower"), &en), "hello");
        assert_eq!(format("hello world", Some("cap"), &en), "Hello world");
        assert_eq!(format("", Some("cap"), &en), "");
        assert_eq!(format("my_class_Name", Some("Camel"), &en), "MyClassName");
        assert_eq!(format("Class", Some("Camel"), &en), "class");
        assert_eq!(format("a b&c", Some("url-encode"), &en), "a+b%26c");
        assert_eq!(format("<a>&", Some("xml-encode"), &en), "&lt;a&gt;&amp;");
        assert_eq!(format("\u{1}", Some("xml-encode"), &en), "&#1;");
    }

    #[test]
    fn template_fallback() {
        let en = en();
        assert_eq!(format("x", Some("%s!"), &en), "x!");
        assert_eq!(format("x", Some("plain"), &en), "plain");
    }

    #[test]
    fn unusable_template_leaves_value() {
        assert_eq!(format("x", Some("%d"), &en()), "x");
        assert!(matches!(
            try_format("x", Some("%d"), &en()),
            Err(FormatError::Template { .. })
        ));
    }

    #[test]
    fn renderer_uses_given_locale() {
        let renderer = StringRenderer::new();
        let tr: Locale = "tr".parse().unwrap();
        assert_eq!(renderer.render("i", Some("upper"), &tr), "İ");
        assert_eq!(renderer.render("i", Some("upper"), &en()), "I");
    }

    #[test]
    fn renderer_default_locale() {
        let renderer = StringRenderer::from_yaml("locale: tr").unwrap();
        assert_eq!(renderer.locale().language(), "tr");
        assert_eq!(renderer.format("I", Some("lower")), "ı");
        assert_eq!(renderer.try_format("x", Some("[%s]")).unwrap(), "[x]");
        assert_eq!(StringRenderer::new().format("I", Some("lower")), "i");
    }

    #[test]
    fn renderer_is_object_safe() {
        let renderers: Vec<Box<dyn AttributeRenderer>> = vec![Box::new(StringRenderer::new())];
        assert_eq!(renderers[0].render("a", Some("upper"), &en()), "A");
    }
}
