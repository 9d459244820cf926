//! Report-style block extraction
//!
//! Some reports lay out one block per store instead of one row per store:
//!
//! ```text
//! STORE X
//! CA REALISE   4224   8739
//! OBJECTIF     5056  11712
//! ```
//!
//! The extractor recognizes the actual-value row by its marker phrase, takes
//! the label from the row above and the target from the row below, and the
//! resulting blocks can be turned back into a plain three-column table.

use sheetsift_core::{Cell, Grid, MetricBlock};

use crate::config::{InferenceConfig, KeywordSet};
use crate::text;

/// First amount after the label cell
fn first_amount(row: &[Cell]) -> Option<f64> {
    row.iter().skip(1).find_map(text::amount)
}

fn block_label(previous: Option<&[Cell]>, keywords: &KeywordSet, index: usize) -> String {
    let label = previous
        .and_then(|row| row.first())
        .map(text::label)
        .unwrap_or_default();
    if label.is_empty() {
        format!("{} {}", keywords.unnamed_block_prefix, index + 1)
    } else {
        label
    }
}

/// Scan the whole grid for label / actual / target row groups.
///
/// The actual and target values are the first amounts of their rows, not the
/// largest, so trailing cumulative columns are ignored. Blocks where both
/// values are zero are dropped.
pub fn extract_blocks(grid: &Grid, config: &InferenceConfig) -> Vec<MetricBlock> {
    let keywords = &config.keywords;
    let rows = grid.rows();
    let mut blocks = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let signature = text::row_signature(row);
        if !text::contains_any(&signature, &keywords.actual_row_markers) {
            continue;
        }

        let actual = first_amount(row).unwrap_or(0.0);
        let target = rows
            .get(i + 1)
            .filter(|next| text::contains_any(&text::row_signature(next), &keywords.target_row_markers))
            .and_then(|next| first_amount(next))
            .unwrap_or(0.0);

        if actual == 0.0 && target == 0.0 {
            log::debug!("skipping empty block at row {i}");
            continue;
        }

        let previous = i.checked_sub(1).map(|p| rows[p].as_slice());
        let label = block_label(previous, keywords, blocks.len());
        blocks.push(MetricBlock::new(label, actual, target));
    }

    log::debug!("found {} report blocks", blocks.len());
    blocks
}

/// Rebuild a `[label, actual, target]` table, header first, from blocks
pub fn synthesize_table(blocks: &[MetricBlock], config: &InferenceConfig) -> Grid {
    let header = config
        .keywords
        .synthesized_headers
        .iter()
        .map(|h| Cell::from(h.as_str()))
        .collect();

    let mut rows = vec![header];
    rows.extend(blocks.iter().map(|block| {
        vec![
            Cell::from(block.label.as_str()),
            Cell::from(block.actual_value),
            Cell::from(block.target_value),
        ]
    }));
    Grid::from_rows(rows)
}
