//! Prelude module - common imports for sheetsift users
//!
//! ```rust
//! use sheetsift::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    aggregate_metrics,
    extract_sheet,
    extract_workbook,
    numeric_columns,
    read_workbook,
    // Cell and table types
    Cell,
    // Charts
    Chart,
    ColumnDescriptor,
    ColumnType,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    Gallery,
    GallerySort,
    Grid,
    // Import
    ImportOutcome,
    Importer,
    InferenceConfig,
    MetricBlock,
    MetricError,
    RawSheet,
    Result,
    RowStore,
    Scalar,
    SheetResult,
    StoreChart,
    // Reading
    Workbook,
    WorkbookFormat,
};
