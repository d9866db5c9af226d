//! Error types for repometrics

use thiserror::Error;

/// Errors produced while loading or assembling dashboard data
///
/// The CSV tokenizer and the repository reference normalizer never fail;
/// these variants cover the surrounding I/O and document-level checks.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to read CSV input
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to write serialized output
    #[error("Write error: {0}")]
    WriteError(String),

    /// Document is shorter than a header row plus one data row
    #[error("Document too short: {0}")]
    EmptyDocument(String),

    /// A required column is missing from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Failed to load or save view configuration
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for repometrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;
