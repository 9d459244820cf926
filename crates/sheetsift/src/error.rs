//! Error types for the sheetsift facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort processing of one file
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be decoded
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The CSV input or export failed
    #[error("CSV error: {0}")]
    Csv(#[from] sheetsift_csv::CsvError),

    /// The row store could not be written
    #[error("Store error: {0}")]
    Store(#[from] sheetsift_store::StoreError),

    /// File extension not handled
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
