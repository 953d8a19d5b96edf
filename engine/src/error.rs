//! Engine error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("generation already in progress")]
    AlreadyRunning,

    #[error("count must be between 1 and {max}, got {count}")]
    InvalidCount { count: u32, max: u32 },

    #[error("no data to export")]
    NothingToExport,

    #[error("export to {path} failed: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
