//! Error types for docaudit library.

use std::io;
use thiserror::Error;

/// Result type alias for docaudit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while auditing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The paragraph stream handed over by the parser is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pattern table entry could not be compiled.
    #[error("Invalid {construct} pattern: {message}")]
    Pattern {
        /// Construct the pattern was registered for
        construct: String,
        /// Compiler message
        message: String,
    },

    /// Checkpoint state could not be read or written.
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// Error while exporting results.
    #[error("Export error: {0}")]
    Export(String),
}
