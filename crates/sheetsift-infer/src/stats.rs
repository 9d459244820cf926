//! Summary statistics of the chartable numeric columns of a sheet

use serde::Serialize;
use sheetsift_core::{numeric, Cell, Scalar, SheetResult};

use crate::config::InferenceConfig;
use crate::header::locate_header_by_score;
use crate::text;

/// Aggregates over the parsed values of one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub sum: f64,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ColumnStats {
    /// Statistics of a non-empty value list
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        Some(Self {
            sum,
            avg: sum / values.len() as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            count: values.len(),
        })
    }
}

/// A column holding enough numbers to chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericColumn {
    pub index: usize,
    pub header: String,
    pub values: Vec<f64>,
    pub stats: ColumnStats,
}

const PLACEHOLDER_WORD: &str = "LIGNE";

fn has_placeholder(row: &[Cell], width: usize) -> bool {
    row.iter()
        .take(width)
        .any(|cell| cell.text().trim().to_uppercase().contains(PLACEHOLDER_WORD))
}

fn column_value(cell: &Cell) -> Option<f64> {
    match cell.value.as_ref()? {
        Scalar::Number(n) if !n.is_nan() => Some(*n),
        Scalar::String(s) if !s.is_empty() => numeric::parse_stripped_number(s),
        _ => None,
    }
}

/// Find the columns of a sheet worth charting.
///
/// Rows carrying a "Ligne" filler in their leading cells are ignored, as are
/// columns headed by a "Ligne N" filler. A column qualifies when more than the
/// configured share of data rows parse as numbers (commas read as decimal
/// separators, other characters dropped).
pub fn numeric_columns(sheet: &SheetResult, config: &InferenceConfig) -> Vec<NumericColumn> {
    let grid = &sheet.data;
    let header_row = locate_header_by_score(grid, config);
    let Some(header) = grid.row(header_row) else {
        return Vec::new();
    };

    let rows: Vec<&Vec<Cell>> = grid
        .rows_from(header_row + 1)
        .iter()
        .filter(|row| !has_placeholder(row, config.placeholder_scan_width))
        .collect();
    let min_count = rows.len() as f64 * config.numeric_column_min_ratio;

    header
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            let mut name = text::label(cell);
            if name.is_empty() {
                name = sheet
                    .columns
                    .get(index)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| format!("Column {}", index + 1));
            }
            if text::is_placeholder(&name) {
                return None;
            }

            let values: Vec<f64> = rows
                .iter()
                .filter_map(|row| row.get(index).and_then(column_value))
                .collect();
            if values.len() as f64 <= min_count {
                return None;
            }

            let stats = ColumnStats::from_values(&values)?;
            Some(NumericColumn {
                index,
                header: name,
                values,
                stats,
            })
        })
        .collect()
}
