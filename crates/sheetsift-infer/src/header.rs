//! Header row location
//!
//! Two locators are provided. [`locate_header_by_density`] is used on the
//! plain extraction path and picks the first well-filled row.
//! [`locate_header_by_score`] is used before metric aggregation and favours
//! rows of distinct textual labels, with a bonus for metric keywords.

use ahash::AHashSet;
use sheetsift_core::{numeric, Cell, Grid};

use crate::config::{InferenceConfig, KeywordSet};

/// First row, within the scan window, holding at least the configured share
/// of the densest row's filled cells. Row 0 when no row holds more than one.
pub fn locate_header_by_density(grid: &Grid, config: &InferenceConfig) -> usize {
    let window = &grid.rows()[..grid.row_count().min(config.header_scan_rows)];
    let counts: Vec<usize> = window
        .iter()
        .map(|row| row.iter().filter(|c| !c.is_empty()).count())
        .collect();

    let max = counts.iter().copied().max().unwrap_or(0);
    if max <= 1 {
        return 0;
    }

    let threshold = max as f64 * config.header_density_threshold;
    let found = counts
        .iter()
        .position(|&count| count as f64 >= threshold)
        .unwrap_or(0);
    log::debug!("density header locator chose row {found} (max filled {max})");
    found
}

/// Whether the trimmed text reads as a label rather than a number
fn is_text_label(text: &str) -> bool {
    numeric::parse_float_prefix(&text.replace(',', ".")).is_none()
        && numeric::parse_strict_number(text).is_none()
}

fn matches_keyword(text: &str, keyword: &str) -> bool {
    text == keyword
        || text.split_whitespace().any(|token| token == keyword)
        || (keyword.chars().count() > 3 && text.contains(keyword))
}

fn earns_bonus(text: &str, keywords: &KeywordSet, config: &InferenceConfig) -> bool {
    let lower = text.to_lowercase();
    lower.chars().count() < config.keyword_cell_max_len
        && keywords.header_bonus.iter().any(|k| matches_keyword(&lower, k))
}

/// Header likelihood of one row.
///
/// Rows of many long labels score high, rows of numbers score zero. A
/// repeated merged title is heavily penalized, moderately repetitive rows
/// mildly so, and each cell naming a metric keyword adds a flat bonus.
pub fn score_header_row(row: &[Cell], config: &InferenceConfig) -> f64 {
    let mut filled = 0usize;
    let mut text_count = 0usize;
    let mut total_len = 0usize;
    let mut distinct = AHashSet::new();
    let mut bonus = 0.0;

    for cell in row.iter().filter(|c| !c.is_empty()) {
        let text = cell.text();
        let text = text.trim();
        filled += 1;
        distinct.insert(text.to_string());

        if is_text_label(text) {
            text_count += 1;
            total_len += text.chars().count();
        }
        if earns_bonus(text, &config.keywords, config) {
            bonus += config.keyword_bonus;
        }
    }

    if filled == 0 {
        return 0.0;
    }

    let avg_len = if text_count > 0 {
        total_len as f64 / text_count as f64
    } else {
        0.0
    };
    let mut score = text_count as f64 * ((avg_len + 1.0).ln() + 1.0);

    let uniqueness = distinct.len() as f64 / filled as f64;
    if uniqueness < config.low_uniqueness && avg_len > config.long_title_length {
        score *= config.repeated_title_penalty;
    } else if uniqueness < config.moderate_uniqueness {
        score *= config.low_uniqueness_penalty;
    }

    score + bonus
}

/// Best-scoring row within the metric scan window; the first row wins ties.
/// Row 0 when no row scores above zero.
pub fn locate_header_by_score(grid: &Grid, config: &InferenceConfig) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (index, row) in grid.rows().iter().take(config.metric_header_scan_rows).enumerate() {
        let score = score_header_row(row, config);
        if score > best_score {
            best = index;
            best_score = score;
        }
    }

    if best_score <= 0.0 {
        return 0;
    }
    log::debug!("scoring header locator chose row {best} (score {best_score:.2})");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg() -> InferenceConfig {
        InferenceConfig::default()
    }

    #[test]
    fn test_density_picks_first_dense_row() {
        let grid = Grid::from_values(vec![
            vec![Cell::from("Report 2024"), Cell::empty(), Cell::empty(), Cell::empty()],
            vec![Cell::empty(), Cell::empty(), Cell::empty(), Cell::empty()],
            vec![Cell::from("Name"), Cell::from("Age"), Cell::from("City"), Cell::empty()],
            vec![Cell::from("Alice"), Cell::from(25), Cell::from("Paris"), Cell::from("x")],
        ]);
        // max is 4, threshold 3
        assert_eq!(locate_header_by_density(&grid, &cfg()), 2);
    }

    #[test]
    fn test_density_sparse_grid_defaults_to_zero() {
        let grid = Grid::from_values(vec![
            vec![Cell::empty(), Cell::empty()],
            vec![Cell::empty(), Cell::from("only")],
        ]);
        assert_eq!(locate_header_by_density(&grid, &cfg()), 0);
    }

    #[test]
    fn test_density_respects_scan_window() {
        let mut rows = vec![vec![Cell::from("t"), Cell::empty(), Cell::empty()]; 25];
        rows.push(vec![Cell::from("a"), Cell::from("b"), Cell::from("c")]);
        let grid = Grid::from_rows(rows);
        assert_eq!(locate_header_by_density(&grid, &cfg()), 0);
    }

    #[test]
    fn test_text_label_detection() {
        assert!(is_text_label("Magasin"));
        assert!(!is_text_label("12,5"));
        assert!(!is_text_label("42 items"));
        assert!(!is_text_label("0x1A"));
    }

    #[test]
    fn test_keyword_matching() {
        assert!(matches_keyword("ca", "ca"));
        assert!(matches_keyword("ca réalisé", "ca"));
        assert!(matches_keyword("objectif annuel", "objectif"));
        assert!(!matches_keyword("catégorie", "ca"));
        assert!(matches_keyword("budgets", "budget"));
    }

    #[test]
    fn test_numeric_row_scores_zero() {
        let row = vec![Cell::from(1), Cell::from("2,5"), Cell::from(3)];
        assert_eq!(score_header_row(&row, &cfg()), 0.0);
    }

    #[test]
    fn test_repeated_title_penalized() {
        let title = "Rapport mensuel des ventes";
        let merged = vec![Cell::from(title); 4];
        let labels = vec![
            Cell::from("Magasin"),
            Cell::from("Ville"),
            Cell::from("Région"),
            Cell::from("Code"),
        ];
        assert!(score_header_row(&merged, &cfg()) < score_header_row(&labels, &cfg()));
    }

    #[test]
    fn test_keyword_row_preferred_over_title() {
        let grid = Grid::from_values(vec![
            vec![
                Cell::from("Suivi commercial"),
                Cell::from("Suivi commercial"),
                Cell::from("Suivi commercial"),
            ],
            vec![Cell::from("Magasin"), Cell::from("CA Réalisé"), Cell::from("Objectif")],
            vec![Cell::from("A"), Cell::from(100), Cell::from(200)],
        ]);
        assert_eq!(locate_header_by_score(&grid, &cfg()), 1);
    }

    #[test]
    fn test_score_first_row_wins_ties() {
        let grid = Grid::from_values(vec![
            vec![Cell::from("x"), Cell::from("y")],
            vec![Cell::from("x"), Cell::from("y")],
        ]);
        assert_eq!(locate_header_by_score(&grid, &cfg()), 0);
    }

    #[test]
    fn test_score_numeric_grid_defaults_to_zero() {
        let grid = Grid::from_values(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(locate_header_by_score(&grid, &cfg()), 0);
    }

    proptest! {
        #[test]
        fn test_empty_rows_locate_zero(rows in 0usize..30, cols in 0usize..8) {
            let grid = Grid::from_rows(vec![vec![Cell::empty(); cols]; rows]);
            prop_assert_eq!(locate_header_by_density(&grid, &cfg()), 0);
            prop_assert_eq!(locate_header_by_score(&grid, &cfg()), 0);
        }
    }
}
