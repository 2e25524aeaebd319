//! Error types for loading and decoding peripheral descriptions.

use std::path::PathBuf;

use crate::validate::ValidationReport;

/// Errors that can occur while turning a description file into a model.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Description file not found.
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the description.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root is not a mapping.
    #[error("document root must be a mapping of sections")]
    NotAMapping,

    /// One or more validation rules failed.
    #[error("configuration validation failed ({} errors)", .report.len())]
    Invalid {
        /// Every violation, in validator order.
        report: ValidationReport,
    },

    /// A validated section could not be decoded into its typed record.
    #[error("cannot decode {context}: {source}")]
    Decode {
        /// Which entity was being decoded (e.g. "board", "uart 1").
        context: String,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
