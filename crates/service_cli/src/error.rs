//! CLI error types.

use pathcast_core::types::SeriesError;
use pathcast_engine::ProjectionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `pathcast` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument value not understood.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Required CSV column absent from the header row.
    #[error("Missing column '{0}' in input header")]
    MissingColumn(&'static str),

    /// A CSV record could not be interpreted.
    #[error("Invalid input at line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the input file
        line: u64,
        /// What went wrong
        message: String,
    },

    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// History failed validation.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Projection pipeline failure.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// CSV read or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
