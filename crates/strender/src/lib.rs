//! Strender - locale-aware string attribute rendering for template engines.
//!
//! Template engines let authors attach a format option to a printed value,
//! as in `{{ name | fmt("upper") }}`. Strender implements that hook for
//! strings:
//!
//! | Option | Effect |
//! |--------|--------|
//! | `upper` / `lower` | Locale-aware case conversion of the whole value |
//! | `cap` | Uppercase the first character |
//! | `Camel` | `snake_case` → `SnakeCase` |
//! | `url-encode` | `application/x-www-form-urlencoded` |
//! | `xml-encode` | Entity and character-reference escaping |
//! | anything else | printf-style template, e.g. `%-10s` |
//!
//! # Quick Start
//!
//! ```rust
//! use strender::{format, Locale};
//!
//! let en: Locale = "en-US".parse().unwrap();
//! assert_eq!(format("hello world", Some("cap"), &en), "Hello world");
//! assert_eq!(format("a b&c", Some("url-encode"), &en), "a+b%26c");
//! assert_eq!(format("<a>&", Some("xml-encode"), &en), "&lt;a&gt;&amp;");
//! assert_eq!(format("id", Some("[%4s]"), &en), "[  id]");
//!
//! let tr: Locale = "tr".parse().unwrap();
//! assert_eq!(format("izmir", Some("upper"), &tr), "İZMİR");
//! ```
//!
//! # Template Engines
//!
//! Engines dispatch through the [`AttributeRenderer`] trait, which
//! [`StringRenderer`] implements. For MiniJinja, [`register_filters`] exposes
//! the renderer as the `fmt` filter plus a few shorthands.
//!
//! # Errors
//!
//! [`format`] never fails: a template that cannot take a single string
//! argument leaves the value unchanged and logs a warning through `tracing`.
//! [`try_format`] returns the [`FormatError`] instead.

mod camel;
mod config;
mod error;
mod escape;
mod filters;
mod locale;
mod option;
mod renderer;
mod template;

// Re-export public API
pub use camel::to_upper_camel_case;
pub use config::RendererConfig;
pub use error::{FormatError, Result};
pub use escape::{url_encode, xml_encode};
pub use filters::register_filters;
pub use locale::Locale;
pub use option::FormatOption;
pub use renderer::{format, try_format, AttributeRenderer, StringRenderer};
pub use template::{FormatTemplate, MAX_WIDTH};
