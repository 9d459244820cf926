//! Grid builder: dense rectangular rows from a sparse cell stream

use std::collections::BTreeMap;

use sheetsift_core::{Cell, Grid, RawCell, RawSheet};

use crate::normalize::normalize_cell;

/// Accumulates normalized cells by position and produces a [`Grid`].
///
/// Cells may arrive in any order. Gaps in row or column indices are filled
/// with empty cells when the grid is built.
#[derive(Debug, Default)]
pub struct GridBuilder {
    rows: BTreeMap<usize, BTreeMap<usize, Cell>>,
    width: usize,
}

impl GridBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder fed with every cell of a worksheet
    pub fn from_sheet(sheet: &RawSheet) -> Self {
        let mut builder = Self::new();
        for (row, col, cell) in sheet.cells() {
            builder.push(row, col, cell);
        }
        builder
    }

    /// Normalize and place a raw cell
    pub fn push(&mut self, row: usize, col: usize, cell: &RawCell) {
        self.push_cell(row, col, normalize_cell(cell));
    }

    /// Place an already-normalized cell, replacing any previous one
    pub fn push_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.width = self.width.max(col + 1);
        self.rows.entry(row).or_default().insert(col, cell);
    }

    /// Number of rows spanned so far, gaps included
    pub fn row_span(&self) -> usize {
        self.rows.keys().next_back().map_or(0, |last| last + 1)
    }

    /// Densify, pad and trim.
    ///
    /// Returns `None` when no cell carries a value, so the caller can decide
    /// how an empty worksheet is represented.
    pub fn build(self) -> Option<Grid> {
        let height = self.row_span();
        let width = self.width;
        let mut dense = Vec::with_capacity(height);
        let mut sparse = self.rows.into_iter().peekable();

        for index in 0..height {
            let mut row = vec![Cell::empty(); width];
            if sparse.peek().map(|(r, _)| *r) == Some(index) {
                if let Some((_, cells)) = sparse.next() {
                    for (col, cell) in cells {
                        row[col] = cell;
                    }
                }
            }
            dense.push(row);
        }

        let mut grid = Grid::from_rows(dense);
        grid.trim_trailing_empty_rows();
        if grid.is_blank() {
            None
        } else {
            Some(grid)
        }
    }
}

/// Build the grid of a worksheet, falling back to the `[['A']]` placeholder
/// when the worksheet has no content
pub fn build_grid(sheet: &RawSheet) -> Grid {
    match GridBuilder::from_sheet(sheet).build() {
        Some(grid) => grid,
        None => {
            log::debug!("sheet {:?} has no content, using placeholder grid", sheet.name);
            Grid::placeholder()
        }
    }
}
