use std::path::PathBuf;
use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("Required source '{name}' not found: {path}")]
    MissingSource { name: String, path: PathBuf },

    #[error("Source table has no columns: {0}")]
    EmptyTable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Insufficient data error: {0}")]
    InsufficientData(String),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
