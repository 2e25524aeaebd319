//! Error types for source emission.

use std::path::PathBuf;

/// Errors that can occur while rendering or writing generated source.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// An enabled peripheral lacks a value it needs. Validation rules this
    /// out, so this only fires for hand-built models.
    #[error("{instance} is enabled but has no {field}")]
    MissingField {
        instance: String,
        field: &'static str,
    },

    /// Writing into the output buffer failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// I/O error staging the output file.
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The staged output could not be moved over the target.
    #[error("cannot replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;
