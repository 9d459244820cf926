//! # sheetsift
//!
//! Recover typed tables and store metrics from loosely formatted spreadsheets.
//!
//! Workbooks are read with calamine (XLSX, XLSM, XLSB, XLS, ODS) or the
//! sheetsift CSV reader, then every sheet runs through the inference pipeline
//! of [`sheetsift_infer`]: normalization, grid building, orientation
//! correction, header location and column typing.
//!
//! ## Features
//!
//! - Async one-shot workbook reading ([`read_workbook`])
//! - Parallel per-sheet extraction ([`extract_workbook`])
//! - Actual/target metric blocks and per-store charts
//! - CSV export of each sheet
//! - An [`Importer`] recording extracted rows in a JSON [`RowStore`]
//!
//! ## Example
//!
//! ```rust
//! use sheetsift::prelude::*;
//!
//! let csv = b"Magasin,CA,Objectif\nLyon,50,100\nNice,150,100\n".to_vec();
//! let workbook = Workbook::from_bytes(csv, WorkbookFormat::Csv).unwrap();
//!
//! let config = InferenceConfig::default();
//! let sheets = extract_workbook(&workbook, &config);
//! assert_eq!(sheets[0].header(), vec!["Magasin", "CA", "Objectif"]);
//!
//! let blocks = aggregate_metrics(&sheets[0], &config).unwrap();
//! assert_eq!(blocks[0].percent, 50.0);
//! ```

pub mod error;
pub mod export;
pub mod importer;
pub mod prelude;
pub mod reader;

use rayon::prelude::*;

pub use error::{Error, Result};
pub use export::{csv_export_path, export_csv, render_csv};
pub use importer::{file_hash, FolderReport, ImportOutcome, ImportSummary, Importer, ImporterOptions};
pub use reader::{read_workbook, NoStyles, StyleExtractor, Workbook, WorkbookFormat};

// Re-export core types
pub use sheetsift_core::{
    column_index, column_name, Cell, CellError, ColumnDescriptor, ColumnType, Grid, MetricBlock,
    MetricError, RawCell, RawSheet, RawValue, Scalar, SheetResult, StyleInfo,
};

// Re-export pipeline entry points
pub use sheetsift_infer::{
    aggregate_metrics, build_grid, extract_sheet, numeric_columns, ColumnStats, InferenceConfig,
    KeywordSet, NumericColumn,
};

pub use sheetsift_chart::{Chart, ChartType, Gallery, GallerySort, StoreChart, StoreChartLabels};
pub use sheetsift_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use sheetsift_store::{RowStore, DEFAULT_STORE_FILE};

/// Extract every sheet of a workbook.
///
/// Sheets are processed in parallel; results keep workbook order, so the
/// first one is the primary sheet.
pub fn extract_workbook(workbook: &Workbook, config: &InferenceConfig) -> Vec<SheetResult> {
    workbook
        .sheets()
        .par_iter()
        .map(|sheet| {
            let result = extract_sheet(sheet, config);
            tracing::debug!(
                "Sheet {}: {} rows, {} columns",
                result.name,
                result.row_count,
                result.columns.len()
            );
            result
        })
        .collect()
}
