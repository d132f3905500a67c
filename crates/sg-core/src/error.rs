//! Error types for the sg-core crate.
//!
//! This module provides the [`ConfigError`] type for failures while loading
//! and validating configuration files and schema snapshots.

/// Errors that can occur during configuration and snapshot loading.
///
/// # Examples
///
/// ```
/// use sg_core::ConfigError;
///
/// let error = ConfigError::DuplicateSchema("public".to_owned());
/// assert!(error.to_string().contains("public"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// The same schema is configured more than once.
    #[error("schema '{0}' is configured more than once")]
    DuplicateSchema(String),

    /// An I/O error occurred while reading a file.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON input.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
