//! Error types for sheetsift-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetsift-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid column letters (e.g. "A1" or "")
    #[error("Invalid column name: {0}")]
    InvalidColumnName(String),

    /// Text that is not an Excel error value
    #[error("Invalid cell error: {0}")]
    InvalidCellError(String),
}
