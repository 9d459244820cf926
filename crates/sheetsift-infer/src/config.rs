//! Tuning constants and keyword sets for the inference heuristics
//!
//! The numeric thresholds are intentional tuning values. They are gathered
//! here so they can be adjusted through [`InferenceConfig`] without touching
//! the algorithms that use them.

use serde::{Deserialize, Serialize};

/// Rows scanned by the density header locator
pub const HEADER_SCAN_ROWS: usize = 20;

/// Rows scanned by the scoring header locator used for metric detection
pub const METRIC_HEADER_SCAN_ROWS: usize = 10;

/// A header candidate must hold at least this share of the densest row's cells
pub const HEADER_DENSITY_THRESHOLD: f64 = 0.75;

/// Rows must beat columns by this margin in consistency before transposing
pub const TRANSPOSE_MARGIN: f64 = 0.1;

/// Non-empty values sampled per column for type inference
pub const TYPE_SAMPLE_SIZE: usize = 10;

/// Uniqueness below this, with long text, marks a repeated merged title
pub const LOW_UNIQUENESS: f64 = 0.5;

/// Uniqueness below this gets the mild penalty
pub const MODERATE_UNIQUENESS: f64 = 0.8;

/// Average text length above which a low-uniqueness row is taken for a title
pub const LONG_TITLE_LENGTH: f64 = 15.0;

/// Score multiplier for a repeated merged title
pub const REPEATED_TITLE_PENALTY: f64 = 0.1;

/// Score multiplier for moderately repetitive rows
pub const LOW_UNIQUENESS_PENALTY: f64 = 0.8;

/// Only cells shorter than this (in characters) can earn the keyword bonus
pub const KEYWORD_CELL_MAX_LEN: usize = 20;

/// Score added per header cell matching a metric keyword
pub const KEYWORD_BONUS: f64 = 5.0;

/// A chartable column needs parsed values in more than this share of rows
pub const NUMERIC_COLUMN_MIN_RATIO: f64 = 0.1;

/// Leading cells inspected for "Ligne N" placeholders
pub const PLACEHOLDER_SCAN_WIDTH: usize = 20;

/// Keyword lists used to recognize metric columns and report blocks.
///
/// All entries are compared against lowercased text. The default set targets
/// French retail reports ("CA Réalisé" / "Objectif").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSet {
    /// Substrings identifying the actual (realized) column
    pub actual_columns: Vec<String>,
    /// Substrings identifying the target column
    pub target_columns: Vec<String>,
    /// A target candidate containing one of these is an actual column instead
    pub actual_exclusive: Vec<String>,
    /// Header cells matching one of these earn the keyword bonus
    pub header_bonus: Vec<String>,
    /// Phrases marking the actual-value row of a report block
    pub actual_row_markers: Vec<String>,
    /// Phrases marking the target row of a report block
    pub target_row_markers: Vec<String>,
    /// Row labels that are summaries or repeated headers, not data
    pub skip_labels: Vec<String>,
    /// Prefix of the label given to a block without a name
    pub unnamed_block_prefix: String,
    /// Header of the table synthesized from report blocks: label, actual, target
    pub synthesized_headers: [String; 3],
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            actual_columns: strings(&["ca réalisé", "chiffre d'affaires", "ca", "realise", "réalisé"]),
            target_columns: strings(&["objectif", "budget", "prevu", "prévu", "obj"]),
            actual_exclusive: strings(&["réalisé", "realise", "chiffre d'affaires"]),
            header_bonus: strings(&["ca", "objectif", "budget", "réalisé", "realise", "prévu", "prevu"]),
            actual_row_markers: strings(&["ca réalisé", "ca realise"]),
            target_row_markers: strings(&["objectif"]),
            skip_labels: strings(&[
                "objectif",
                "total",
                "ca realise",
                "ca réalisé",
                "% de realisation",
                "% de réalisation",
                "moyenne",
            ]),
            unnamed_block_prefix: "Store".to_string(),
            synthesized_headers: [
                "Magasin".to_string(),
                "CA Réalisé".to_string(),
                "Objectif".to_string(),
            ],
        }
    }
}

/// Options for the inference pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Rows scanned by the density header locator (default: 20)
    pub header_scan_rows: usize,
    /// Rows scanned by the scoring header locator (default: 10)
    pub metric_header_scan_rows: usize,
    /// Density threshold for header rows (default: 0.75)
    pub header_density_threshold: f64,
    /// Hysteresis margin for transposition (default: 0.1)
    pub transpose_margin: f64,
    /// Values sampled per column (default: 10)
    pub type_sample_size: usize,
    /// Repeated-title uniqueness threshold (default: 0.5)
    pub low_uniqueness: f64,
    /// Mild-penalty uniqueness threshold (default: 0.8)
    pub moderate_uniqueness: f64,
    /// Average text length marking a title (default: 15)
    pub long_title_length: f64,
    /// Multiplier for repeated titles (default: 0.1)
    pub repeated_title_penalty: f64,
    /// Multiplier for repetitive rows (default: 0.8)
    pub low_uniqueness_penalty: f64,
    /// Longest cell eligible for the keyword bonus (default: 20)
    pub keyword_cell_max_len: usize,
    /// Bonus per keyword cell (default: 5)
    pub keyword_bonus: f64,
    /// Minimum share of parsed values for a chartable column (default: 0.1)
    pub numeric_column_min_ratio: f64,
    /// Leading cells checked for placeholders (default: 20)
    pub placeholder_scan_width: usize,
    /// Keyword lists
    pub keywords: KeywordSet,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            header_scan_rows: HEADER_SCAN_ROWS,
            metric_header_scan_rows: METRIC_HEADER_SCAN_ROWS,
            header_density_threshold: HEADER_DENSITY_THRESHOLD,
            transpose_margin: TRANSPOSE_MARGIN,
            type_sample_size: TYPE_SAMPLE_SIZE,
            low_uniqueness: LOW_UNIQUENESS,
            moderate_uniqueness: MODERATE_UNIQUENESS,
            long_title_length: LONG_TITLE_LENGTH,
            repeated_title_penalty: REPEATED_TITLE_PENALTY,
            low_uniqueness_penalty: LOW_UNIQUENESS_PENALTY,
            keyword_cell_max_len: KEYWORD_CELL_MAX_LEN,
            keyword_bonus: KEYWORD_BONUS,
            numeric_column_min_ratio: NUMERIC_COLUMN_MIN_RATIO,
            placeholder_scan_width: PLACEHOLDER_SCAN_WIDTH,
            keywords: KeywordSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_override() {
        let config: InferenceConfig =
            serde_json::from_str(r#"{ "transpose_margin": 0.25, "keywords": { "target_columns": ["goal"] } }"#)
                .unwrap();
        assert_eq!(config.transpose_margin, 0.25);
        assert_eq!(config.header_scan_rows, HEADER_SCAN_ROWS);
        assert_eq!(config.keywords.target_columns, vec!["goal".to_string()]);
        // untouched keyword lists keep their defaults
        assert_eq!(config.keywords.actual_row_markers, KeywordSet::default().actual_row_markers);
    }
}
