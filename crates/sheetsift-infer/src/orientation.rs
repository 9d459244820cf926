//! Orientation detection: find grids laid out attribute-per-row
//!
//! A well-formed table holds one kind of value per column. When the rows of a
//! grid are markedly more type-homogeneous than its columns, the attributes
//! run along the rows and the grid is flipped before header detection.

use sheetsift_core::{numeric, Cell, Grid, Scalar};

use crate::config::InferenceConfig;

/// Coarse category used for consistency scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Numeric,
    Text,
}

fn categorize(cell: &Cell) -> Option<Category> {
    match cell.value.as_ref()? {
        v if v.is_blank() => None,
        Scalar::Number(n) if n.is_nan() => Some(Category::Text),
        Scalar::Number(_) => Some(Category::Numeric),
        Scalar::String(s) if numeric::parse_float_prefix(s).is_some() => Some(Category::Numeric),
        Scalar::String(_) | Scalar::Boolean(_) | Scalar::Date(_) => Some(Category::Text),
    }
}

/// Whether every non-empty value after the leading label shares one category.
///
/// A vector without typed values is trivially consistent.
pub fn is_consistent<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> bool {
    let mut categories = cells.into_iter().skip(1).filter_map(categorize);
    match categories.next() {
        Some(first) => categories.all(|c| c == first),
        None => true,
    }
}

/// Fraction of consistent columns and fraction of consistent rows
pub fn consistency_scores(grid: &Grid) -> (f64, f64) {
    let rows = grid.row_count();
    let cols = grid.column_count();
    if rows == 0 || cols == 0 {
        return (1.0, 1.0);
    }

    let consistent_cols = (0..cols).filter(|&c| is_consistent(grid.column(c))).count();
    let consistent_rows = grid.rows().iter().filter(|row| is_consistent(row.iter())).count();

    (
        consistent_cols as f64 / cols as f64,
        consistent_rows as f64 / rows as f64,
    )
}

/// Decide whether the grid holds its attributes in rows.
///
/// Grids smaller than 2x2 are never transposed.
pub fn should_transpose(grid: &Grid, config: &InferenceConfig) -> bool {
    if grid.row_count() < 2 || grid.column_count() < 2 {
        return false;
    }

    let (col_score, row_score) = consistency_scores(grid);
    let transpose = row_score > col_score + config.transpose_margin;
    if transpose {
        log::debug!(
            "rows more consistent than columns ({row_score:.2} > {col_score:.2}), transposing"
        );
    }
    transpose
}

/// Return the grid in column-major attribute layout and whether it was flipped
pub fn correct_orientation(grid: Grid, config: &InferenceConfig) -> (Grid, bool) {
    if should_transpose(&grid, config) {
        (grid.transpose(), true)
    } else {
        (grid, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sheetsift_core::Cell;

    fn cfg() -> InferenceConfig {
        InferenceConfig::default()
    }

    #[test]
    fn test_is_consistent_ignores_label_and_blanks() {
        let cells = vec![Cell::from("Age"), Cell::from(25), Cell::empty(), Cell::from("30")];
        assert!(is_consistent(cells.iter()));

        let mixed = vec![Cell::from("Name"), Cell::from("Alice"), Cell::from(3)];
        assert!(!is_consistent(mixed.iter()));

        let label_only = vec![Cell::from("x")];
        assert!(is_consistent(label_only.iter()));
    }

    #[test]
    fn test_numeric_prefix_counts_as_number() {
        let cells = vec![Cell::from("h"), Cell::from("12kg"), Cell::from(4)];
        assert!(is_consistent(cells.iter()));

        let with_bool = vec![Cell::from("h"), Cell::new(true), Cell::from("yes")];
        assert!(is_consistent(with_bool.iter()));
    }

    #[test]
    fn test_transposed_grid_detected() {
        let grid = Grid::from_values(vec![
            vec![Cell::from("Name"), Cell::from("Alice"), Cell::from("Bob")],
            vec![Cell::from("Age"), Cell::from(25), Cell::from(30)],
            vec![Cell::from("City"), Cell::from("Paris"), Cell::from("London")],
        ]);
        assert!(should_transpose(&grid, &cfg()));

        let (fixed, flipped) = correct_orientation(grid, &cfg());
        assert!(flipped);
        assert_eq!(fixed.cell(0, 1), Some(&Cell::from("Age")));
        assert_eq!(fixed.cell(2, 1), Some(&Cell::from(30)));
    }

    #[test]
    fn test_normal_grid_kept() {
        let grid = Grid::from_values(vec![
            vec![Cell::from("Name"), Cell::from("Age"), Cell::from("City")],
            vec![Cell::from("Alice"), Cell::from(25), Cell::from("Paris")],
            vec![Cell::from("Bob"), Cell::from(30), Cell::from("London")],
        ]);
        assert!(!should_transpose(&grid, &cfg()));
        let (same, flipped) = correct_orientation(grid.clone(), &cfg());
        assert!(!flipped);
        assert_eq!(same, grid);
    }

    #[test]
    fn test_margin_prevents_flip_on_tie() {
        // every vector is consistent once its label is skipped
        let grid = Grid::from_values(vec![
            vec![Cell::from("a"), Cell::from(1)],
            vec![Cell::from(2), Cell::from("b")],
        ]);
        let (cols, rows) = consistency_scores(&grid);
        assert!((rows - cols).abs() <= 0.1);
        assert!(!should_transpose(&grid, &cfg()));
    }

    fn any_cell() -> impl Strategy<Value = Cell> {
        prop_oneof![
            Just(Cell::empty()),
            any::<i32>().prop_map(Cell::from),
            "[a-z]{1,4}".prop_map(|s| Cell::from(s.as_str())),
        ]
    }

    fn small_grid() -> impl Strategy<Value = Grid> {
        prop_oneof![
            prop::collection::vec(any_cell(), 0..6).prop_map(|row| Grid::from_rows(vec![row])),
            prop::collection::vec(any_cell(), 0..6)
                .prop_map(|col| Grid::from_rows(col.into_iter().map(|c| vec![c]).collect())),
        ]
    }

    proptest! {
        #[test]
        fn test_small_grids_never_transposed(grid in small_grid()) {
            prop_assert!(!should_transpose(&grid, &cfg()));
        }

        #[test]
        fn test_decision_is_deterministic(
            rows in prop::collection::vec(prop::collection::vec(-100i32..100, 1..5), 1..5)
        ) {
            let grid = Grid::from_values(rows);
            prop_assert_eq!(should_transpose(&grid, &cfg()), should_transpose(&grid, &cfg()));
        }
    }
}
