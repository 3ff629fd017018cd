use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Only file access and PDF encoding can fail; everything the parser does not
/// understand is absorbed into an empty field instead of an error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot access file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
