//! Metric aggregation: actual vs target per labelled row

use sheetsift_core::{Cell, MetricBlock, MetricError, SheetResult};

use crate::blocks::{extract_blocks, synthesize_table};
use crate::config::{InferenceConfig, KeywordSet};
use crate::header::locate_header_by_score;
use crate::text;

/// Indices of the actual and target columns of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricColumns {
    pub actual: usize,
    pub target: usize,
}

fn find_column(
    headers: &[String],
    wanted: &[String],
    rejected: &[String],
    skip: Option<usize>,
) -> Option<usize> {
    headers.iter().enumerate().position(|(i, header)| {
        let lower = header.to_lowercase();
        Some(i) != skip && text::contains_any(&lower, wanted) && !text::contains_any(&lower, rejected)
    })
}

/// Locate the actual and target columns by keyword.
///
/// A header naming a target ("Objectif CA") is never taken as the actual
/// column, and a header naming the realized amount is never taken as the
/// target. Returns `None` unless both are found.
pub fn find_metric_columns(headers: &[String], keywords: &KeywordSet) -> Option<MetricColumns> {
    let actual = find_column(headers, &keywords.actual_columns, &keywords.target_columns, None)?;
    let mut target = find_column(headers, &keywords.target_columns, &keywords.actual_exclusive, None)?;
    if target == actual {
        target = find_column(
            headers,
            &keywords.target_columns,
            &keywords.actual_exclusive,
            Some(actual),
        )?;
    }
    Some(MetricColumns { actual, target })
}

fn is_data_label(label: &str, keywords: &KeywordSet) -> bool {
    !label.is_empty()
        && !text::mentions_placeholder(label)
        && !text::contains_any(&label.to_lowercase(), &keywords.skip_labels)
}

fn metric_value(row: &[Cell], index: usize) -> f64 {
    row.get(index).and_then(text::amount).unwrap_or(0.0)
}

/// Aggregate a header plus data rows into metric blocks.
///
/// The label is the first cell of each row. Summary rows ("Total",
/// "Moyenne"...), repeated headers and "Ligne N" fillers are skipped.
pub fn aggregate_table(
    headers: &[String],
    rows: &[Vec<Cell>],
    config: &InferenceConfig,
) -> Result<Vec<MetricBlock>, MetricError> {
    let keywords = &config.keywords;
    let columns = find_metric_columns(headers, keywords).ok_or_else(|| MetricError::ColumnsNotFound {
        headers: headers.to_vec(),
    })?;

    let blocks: Vec<MetricBlock> = rows
        .iter()
        .filter_map(|row| {
            let label = row.first().map(text::label).unwrap_or_default();
            if !is_data_label(&label, keywords) {
                return None;
            }
            let actual = metric_value(row, columns.actual);
            let target = metric_value(row, columns.target);
            Some(MetricBlock::new(label, actual, target))
        })
        .collect();

    if blocks.is_empty() {
        return Err(MetricError::NoValidRows);
    }
    Ok(blocks)
}

/// Derive chart-ready metric blocks from an extracted sheet.
///
/// The header row is chosen with the scoring locator. When the header does
/// not name both metric columns, the sheet is scanned for report blocks and
/// the table rebuilt from them; if that finds nothing either, the detected
/// headers are reported.
pub fn aggregate_metrics(
    sheet: &SheetResult,
    config: &InferenceConfig,
) -> Result<Vec<MetricBlock>, MetricError> {
    if !sheet.has_content() || sheet.data.row_count() < 2 {
        return Err(MetricError::NoData);
    }

    let grid = &sheet.data;
    let header_row = locate_header_by_score(grid, config);
    let headers: Vec<String> = grid
        .row(header_row)
        .unwrap_or_default()
        .iter()
        .map(text::label)
        .collect();

    match aggregate_table(&headers, grid.rows_from(header_row + 1), config) {
        Err(MetricError::ColumnsNotFound { headers }) => {
            let blocks = extract_blocks(grid, config);
            if blocks.is_empty() {
                log::debug!("sheet {:?}: metric columns not found in {headers:?}", sheet.name);
                return Err(MetricError::ColumnsNotFound { headers });
            }

            log::debug!(
                "sheet {:?}: rebuilding table from {} report blocks",
                sheet.name,
                blocks.len()
            );
            let table = synthesize_table(&blocks, config);
            let synthesized: Vec<String> = table
                .row(0)
                .unwrap_or_default()
                .iter()
                .map(text::label)
                .collect();
            aggregate_table(&synthesized, table.rows_from(1), config)
        }
        other => other,
    }
}
