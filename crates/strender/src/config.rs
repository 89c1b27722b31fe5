//! Renderer configuration.
//!
//! Configuration is plain YAML. Every key is optional:
//!
//! ```yaml
//! # Locale used when a caller does not pass one.
//! locale: tr-TR
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Locale;

/// Settings for a [`StringRenderer`](crate::StringRenderer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Default locale for filter calls that name none. Root if unset.
    pub locale: Locale,
}

impl RendererConfig {
    /// Parses a configuration document.
    ///
    /// ```rust
    /// use strender::RendererConfig;
    ///
    /// let config = RendererConfig::from_yaml("locale: de_DE").unwrap();
    /// assert_eq!(config.locale.to_string(), "de-DE");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
