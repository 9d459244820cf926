//! Dense rectangular grid of normalized cells

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Scalar};
use crate::column::column_name;

/// Whether every cell of a row is empty (no value or a blank string)
pub fn is_empty_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

/// Rows of cells, all of the same length.
///
/// Built once per worksheet scan and replaced wholesale (e.g. by
/// [`Grid::transpose`]) rather than edited cell by cell. A grid without
/// columns has no rows either.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl Grid {
    /// Create an empty grid (no rows)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows, padding short rows with empty cells.
    /// Rows that are all zero-length give the empty grid.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Self::default();
        }
        for row in &mut rows {
            row.resize_with(width, Cell::empty);
        }
        Self { rows }
    }

    /// Build a grid from anything convertible into cells
    ///
    /// ```
    /// use sheetsift_core::{Cell, Grid};
    ///
    /// let grid = Grid::from_values(vec![
    ///     vec![Cell::from("Name"), Cell::from("Age")],
    ///     vec![Cell::from("Alice")],
    /// ]);
    /// assert_eq!(grid.column_count(), 2);
    /// assert!(grid.cell(1, 1).unwrap().is_empty());
    /// ```
    pub fn from_values<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// The minimal grid used for a worksheet without content: `[['A']]`
    pub fn placeholder() -> Self {
        Self {
            rows: vec![vec![Cell::new(Scalar::String(column_name(0)))]],
        }
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get a cell by position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterate over one column top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(col))
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (every row has this length)
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Whether the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether no cell of the grid holds a value
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| is_empty_row(row))
    }

    /// Rows starting at `start`
    pub fn rows_from(&self, start: usize) -> &[Vec<Cell>] {
        self.rows.get(start..).unwrap_or(&[])
    }

    /// Swap rows and columns: cell (i, j) moves to (j, i)
    pub fn transpose(&self) -> Grid {
        let width = self.column_count();
        let rows = (0..width)
            .map(|col| self.rows.iter().map(|row| row[col].clone()).collect())
            .collect();
        Grid { rows }
    }

    /// Remove fully-empty rows from the end, stopping at the first row with content
    pub fn trim_trailing_empty_rows(&mut self) {
        while self.rows.last().is_some_and(|row| is_empty_row(row)) {
            self.rows.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample() -> Grid {
        Grid::from_values(vec![
            vec![Cell::from("Name"), Cell::from("Alice"), Cell::from("Bob")],
            vec![Cell::from("Age"), Cell::from(25), Cell::from(30)],
        ])
    }

    #[test]
    fn test_from_rows_pads_to_rectangle() {
        let grid = Grid::from_rows(vec![
            vec![Cell::from("a")],
            vec![],
            vec![Cell::from(1), Cell::from(2), Cell::from(3)],
        ]);
        assert_eq!(grid.row_count(), 3);
        assert!(grid.rows().iter().all(|r| r.len() == 3));
        assert_eq!(grid.cell(1, 2), Some(&Cell::empty()));
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.cell(1, 0), Some(&Cell::from("Alice")));
        assert_eq!(t.cell(2, 1), Some(&Cell::from(30)));
    }

    #[test]
    fn test_trim_trailing_empty_rows() {
        let mut grid = Grid::from_values(vec![
            vec![Cell::from("x"), Cell::empty()],
            vec![Cell::empty(), Cell::empty()],
            vec![Cell::from("y"), Cell::empty()],
            vec![Cell::from("  "), Cell::empty()],
            vec![Cell::empty(), Cell::empty()],
        ]);
        grid.trim_trailing_empty_rows();
        assert_eq!(grid.row_count(), 3);
        // interior empty rows are kept
        assert!(is_empty_row(grid.row(1).unwrap()));
    }

    #[test]
    fn test_trim_everything() {
        let mut grid = Grid::from_values(vec![vec![Cell::empty()], vec![Cell::from("")]]);
        grid.trim_trailing_empty_rows();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_placeholder() {
        let grid = Grid::placeholder();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.cell(0, 0).unwrap().text(), "A");
    }

    #[test]
    fn test_zero_width_rows_collapse() {
        let grid = Grid::from_rows(vec![vec![], vec![]]);
        assert!(grid.is_empty());
        assert_eq!(grid.transpose(), grid);
        assert_eq!(grid.transpose().transpose(), grid);
    }

    #[test]
    fn test_deserialize_pads_ragged_rows() {
        let grid: Grid =
            serde_json::from_str(r#"[[{"value": "a", "style": null}], []]"#).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.cell(1, 0), Some(&Cell::empty()));
        assert_eq!(grid.transpose().row_count(), 1);

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[["));
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    fn arb_cell() -> impl Strategy<Value = Cell> {
        prop_oneof![
            Just(Cell::empty()),
            Just(Cell::from("")),
            (-1000i32..1000).prop_map(Cell::from),
            "[a-z ]{0,6}".prop_map(|s| Cell::from(s.as_str())),
        ]
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(arb_cell(), cols), rows)
                .prop_map(Grid::from_rows)
        })
    }

    proptest! {
        #[test]
        fn prop_transpose_is_self_inverse(grid in arb_grid()) {
            prop_assert_eq!(grid.transpose().transpose(), grid);
        }

        #[test]
        fn prop_trim_is_idempotent(grid in arb_grid()) {
            let mut once = grid.clone();
            once.trim_trailing_empty_rows();
            let mut twice = once.clone();
            twice.trim_trailing_empty_rows();
            prop_assert_eq!(once.clone(), twice);
            prop_assert!(once.rows().last().map_or(true, |r| !is_empty_row(r)));
        }
    }
}
