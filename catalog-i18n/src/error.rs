//! Error types for message catalog loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The catalog file could not be read.
    #[error("failed to read message catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON.
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but is not an object of strings.
    #[error("invalid message catalog shape: {0}")]
    Shape(String),
}

pub type I18nResult<T> = Result<T, I18nError>;
