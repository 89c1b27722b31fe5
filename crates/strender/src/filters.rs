//! MiniJinja filter registration.
//!
//! ## Filters
//!
//! - `fmt(option, locale=?)` - Apply a format option or template
//! - `cap(locale=?)` - Uppercase the first character
//! - `camel(locale=?)` - Convert to UpperCamelCase
//! - `url_encode` - Form-urlencode the value
//! - `xml_encode` - Escape for XML
//!
//! ```jinja
//! {{ name | fmt("upper") }}
//! {{ title | fmt("%-20s|") }}
//! {{ city | fmt("upper", locale="tr") }}
//! ```
//!
//! `locale` defaults to the renderer's locale. MiniJinja's own `upper` and
//! `lower` filters are left in place; use `fmt("upper")` for locale-aware
//! case conversion.
//!
//! Unlike [`format`](crate::format), the `fmt` filter fails the render on a
//! template that cannot take a single string argument, so mistakes surface
//! where the template is written.

use std::sync::Arc;

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::error::FormatError;
use crate::locale::Locale;
use crate::renderer::{try_format, StringRenderer};

/// Registers the string formatting filters on a MiniJinja environment.
///
/// # Arguments
///
/// * `env` - The MiniJinja environment to register filters on
/// * `renderer` - Supplies the default locale for filter calls
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use strender::{register_filters, StringRenderer};
///
/// let mut env = Environment::new();
/// register_filters(&mut env, StringRenderer::new());
/// env.add_template("t", "{{ name | fmt('Camel') }}").unwrap();
///
/// let out = env.get_template("t").unwrap().render(context! { name => "user_id" }).unwrap();
/// assert_eq!(out, "UserId");
/// ```
pub fn register_filters(env: &mut Environment<'static>, renderer: StringRenderer) {
    let renderer = Arc::new(renderer);

    // {{ value | fmt("upper") }} or {{ value | fmt("%5s", locale="de") }}
    let r = Arc::clone(&renderer);
    env.add_filter(
        "fmt",
        move |value: Value, option: Option<String>, kwargs: Kwargs| -> Result<String, Error> {
            apply_filter(&r, &value, option.as_deref(), &kwargs)
        },
    );

    let r = Arc::clone(&renderer);
    env.add_filter(
        "cap",
        move |value: Value, kwargs: Kwargs| -> Result<String, Error> {
            apply_filter(&r, &value, Some("cap"), &kwargs)
        },
    );

    let r = Arc::clone(&renderer);
    env.add_filter(
        "camel",
        move |value: Value, kwargs: Kwargs| -> Result<String, Error> {
            apply_filter(&r, &value, Some("Camel"), &kwargs)
        },
    );

    // Encoding ignores the locale, so these take no kwargs.
    let r = Arc::clone(&renderer);
    env.add_filter("url_encode", move |value: Value| -> String {
        r.format(&value_text(&value), Some("url-encode"))
    });

    env.add_filter("xml_encode", move |value: Value| -> String {
        renderer.format(&value_text(&value), Some("xml-encode"))
    });
}

fn apply_filter(
    renderer: &StringRenderer,
    value: &Value,
    option: Option<&str>,
    kwargs: &Kwargs,
) -> Result<String, Error> {
    let locale = match kwargs.get::<Option<String>>("locale")? {
        Some(tag) => tag.parse::<Locale>().map_err(to_template_error)?,
        None => renderer.locale().clone(),
    };
    kwargs.assert_all_used()?;

    try_format(&value_text(value), option, &locale).map_err(to_template_error)
}

/// Strings render without quotes; everything else uses its display form.
fn value_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn to_template_error(err: FormatError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}
