//! Error types for the strender crate.

use thiserror::Error;

/// Errors that can occur when parsing locales, templates, or configuration.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Locale tag is empty-segmented or contains invalid subtags.
    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),

    /// Format template cannot be applied to a single string argument.
    #[error("invalid format template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Renderer configuration could not be parsed.
    #[error("invalid renderer configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl FormatError {
    pub(crate) fn template(template: &str, reason: impl Into<String>) -> Self {
        FormatError::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for strender operations.
pub type Result<T> = std::result::Result<T, FormatError>;
