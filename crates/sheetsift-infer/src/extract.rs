//! The plain extraction pipeline for one worksheet

use ahash::AHashSet;
use sheetsift_core::{column_name, ColumnDescriptor, Grid, RawSheet, SheetResult};

use crate::builder::GridBuilder;
use crate::config::InferenceConfig;
use crate::header::locate_header_by_density;
use crate::orientation::correct_orientation;
use crate::text;
use crate::typing::detect_column_type;

/// Name and type every column of a grid.
///
/// Names come from the header row's text, or the column letter where the
/// header cell is empty. A name already taken by a column to the left gets a
/// `_2`, `_3`, ... suffix, so names are unique. Types are sampled from the
/// rows below the header, or from the whole grid when nothing follows it.
pub fn describe_columns(
    grid: &Grid,
    header_row: usize,
    config: &InferenceConfig,
) -> Vec<ColumnDescriptor> {
    let header = grid.row(header_row).unwrap_or_default();
    let mut samples = grid.rows_from(header_row + 1);
    if samples.is_empty() {
        samples = grid.rows();
    }

    let mut taken = AHashSet::new();
    (0..grid.column_count())
        .map(|index| {
            let name = header
                .get(index)
                .map(text::label)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| column_name(index));
            let name = unique_name(name, &mut taken);
            ColumnDescriptor::new(name, index, detect_column_type(samples, index, config))
        })
        .collect()
}

fn unique_name(name: String, taken: &mut AHashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{name}_{n}");
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

/// Turn a worksheet into a normalized, oriented, typed table.
///
/// A worksheet without content yields the placeholder result rather than an
/// empty table.
pub fn extract_sheet(sheet: &RawSheet, config: &InferenceConfig) -> SheetResult {
    let Some(grid) = GridBuilder::from_sheet(sheet).build() else {
        log::debug!("sheet {:?} is empty", sheet.name);
        return SheetResult::placeholder(sheet.name.clone());
    };

    let (grid, transposed) = correct_orientation(grid, config);
    let header_row = locate_header_by_density(&grid, config);
    let columns = describe_columns(&grid, header_row, config);
    log::debug!(
        "sheet {:?}: {} rows, {} columns, header row {header_row}, transposed {transposed}",
        sheet.name,
        grid.row_count(),
        columns.len()
    );

    SheetResult {
        name: sheet.name.clone(),
        row_count: grid.row_count(),
        data: grid,
        columns,
        header_row,
        empty: false,
    }
}
