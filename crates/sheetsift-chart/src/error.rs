//! Error types for chart building

use thiserror::Error;

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Chart errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Sort string not of the form `<criteria>-<direction>`
    #[error("Invalid sort order: {0} (expected e.g. name-asc, sum-desc, avg-asc)")]
    InvalidSort(String),
}
