//! Worksheet input and output units

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, RawCell, RawValue};
use crate::column::{ColumnDescriptor, ColumnType};
use crate::grid::Grid;

/// A worksheet as handed over by a workbook reader.
///
/// Cells are `(row, column, cell)` triples with 0-based indices covering the
/// used range, including explicitly empty cells. Order is not significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSheet {
    /// Sheet name
    pub name: String,
    cells: Vec<(usize, usize, RawCell)>,
}

impl RawSheet {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
        }
    }

    /// Build a sheet from dense rows of values, starting at A1
    pub fn from_rows<S, R, V>(name: S, rows: impl IntoIterator<Item = R>) -> Self
    where
        S: Into<String>,
        R: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        let mut sheet = Self::new(name);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                sheet.push(r, c, RawCell::new(value));
            }
        }
        sheet
    }

    /// Add a cell
    pub fn push(&mut self, row: usize, col: usize, cell: RawCell) {
        self.cells.push((row, col, cell));
    }

    /// Iterate over the cells
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &RawCell)> + '_ {
        self.cells.iter().map(|(r, c, cell)| (*r, *c, cell))
    }

    /// Mutable access to every cell, for attaching styles after reading
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut RawCell)> + '_ {
        self.cells.iter_mut().map(|(r, c, cell)| (*r, *c, cell))
    }

    /// Number of cells supplied by the reader
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the reader supplied no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The extracted, typed table of one worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetResult {
    /// Sheet name
    pub name: String,
    /// Full grid after trimming and orientation correction
    pub data: Grid,
    /// One descriptor per grid column, in index order
    pub columns: Vec<ColumnDescriptor>,
    /// Number of grid rows, header included
    pub row_count: usize,
    /// Index into `data` of the row used as header
    pub header_row: usize,
    /// True for the placeholder produced from a sheet without content
    pub empty: bool,
}

impl SheetResult {
    /// The minimal result for a worksheet without content
    pub fn placeholder<S: Into<String>>(name: S) -> Self {
        let data = Grid::placeholder();
        Self {
            name: name.into(),
            columns: vec![ColumnDescriptor::new("A", 0, ColumnType::Text)],
            row_count: data.row_count(),
            header_row: 0,
            data,
            empty: true,
        }
    }

    /// Column names in index order
    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Rows following the header row
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        self.data.rows_from(self.header_row + 1)
    }

    /// Find a column descriptor by exact name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the sheet carried any content
    pub fn has_content(&self) -> bool {
        !self.empty
    }
}
