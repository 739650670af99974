//! Error types for tm-output.

use thiserror::Error;

/// Errors that can occur when writing a map or graph export.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encode error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The rendered temporary file could not be moved over the destination.
    #[error("could not replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
