//! Metric blocks and the conditions reported when they cannot be derived

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One `{label, actual, target, percent}` unit ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBlock {
    /// Row label (store name)
    pub label: String,
    /// Realized value
    pub actual_value: f64,
    /// Target value
    pub target_value: f64,
    /// `actual / target * 100` when target > 0, else 0
    pub percent: f64,
}

impl MetricBlock {
    /// Create a block, computing the percentage of target
    pub fn new<S: Into<String>>(label: S, actual_value: f64, target_value: f64) -> Self {
        Self {
            label: label.into(),
            actual_value,
            target_value,
            percent: percent_of_target(actual_value, target_value),
        }
    }

    /// Whether the target has been reached
    pub fn target_met(&self) -> bool {
        self.percent >= 100.0
    }
}

/// `actual / target * 100`, or 0 when the target is not positive
pub fn percent_of_target(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        actual / target * 100.0
    } else {
        0.0
    }
}

/// Why no metric blocks could be produced for a sheet.
///
/// These are terminal, per-sheet conditions; they never abort sibling sheets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// The sheet has no data rows at all
    #[error("no data in sheet")]
    NoData,

    /// The actual and/or target column could not be identified
    #[error("columns not found (detected headers: {})", headers.join(", "))]
    ColumnsNotFound {
        /// Headers that were detected, for diagnostics
        headers: Vec<String>,
    },

    /// Columns were found but no row produced a block
    #[error("no valid rows")]
    NoValidRows,
}

impl MetricError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MetricError::NoData => "no-data",
            MetricError::ColumnsNotFound { .. } => "columns-not-found",
            MetricError::NoValidRows => "no-valid-rows",
        }
    }
}
