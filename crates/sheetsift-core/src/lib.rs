//! # sheetsift-core
//!
//! Core data structures for the sheetsift table-inference library.
//!
//! This crate provides the types exchanged between the pipeline stages:
//! - [`RawCell`] / [`RawValue`] - Cells as a workbook reader delivers them
//! - [`Cell`] / [`Scalar`] - Normalized cells
//! - [`Grid`] - Dense rectangular rows of cells
//! - [`ColumnDescriptor`] - Name, index and inferred type of a column
//! - [`SheetResult`] - The extracted table of one worksheet
//! - [`MetricBlock`] - Actual/target/percent units for charting
//!
//! ## Example
//!
//! ```rust
//! use sheetsift_core::{Cell, Grid};
//!
//! let grid = Grid::from_values(vec![
//!     vec![Cell::from("Name"), Cell::from("Alice")],
//!     vec![Cell::from("Age"), Cell::from(25)],
//! ]);
//!
//! let flipped = grid.transpose();
//! assert_eq!(flipped.cell(1, 1), Some(&Cell::from(25)));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod grid;
pub mod metric;
pub mod numeric;
pub mod sheet;

// Re-exports for convenience
pub use cell::{Cell, CellError, RawCell, RawValue, Scalar, StyleInfo, TextRun};
pub use column::{column_index, column_name, ColumnDescriptor, ColumnType};
pub use error::{Error, Result};
pub use grid::{is_empty_row, Grid};
pub use metric::{percent_of_target, MetricBlock, MetricError};
pub use sheet::{RawSheet, SheetResult};
