//! # sheetsift-infer
//!
//! Structure inference for loosely laid out worksheets.
//!
//! The plain extraction path turns a [`RawSheet`](sheetsift_core::RawSheet)
//! into a [`SheetResult`](sheetsift_core::SheetResult):
//!
//! 1. [`normalize`] resolves formulas, hyperlinks and rich text to scalars
//! 2. [`builder`] densifies the cells into a rectangular grid
//! 3. [`orientation`] flips grids whose attributes run along rows
//! 4. [`header`] locates the header row
//! 5. [`typing`] classifies each column as number, date or text
//!
//! The metric path ([`aggregate_metrics`]) finds the actual and target
//! columns of a store report, falling back to [`blocks`] for reports laid
//! out as one block per store.
//!
//! ## Example
//!
//! ```rust
//! use sheetsift_core::{RawSheet, RawValue};
//! use sheetsift_infer::{aggregate_metrics, extract_sheet, InferenceConfig};
//!
//! let sheet = RawSheet::from_rows(
//!     "Ventes",
//!     vec![
//!         vec![RawValue::from("Magasin"), RawValue::from("CA Réalisé"), RawValue::from("Objectif")],
//!         vec![RawValue::from("Lyon"), RawValue::from(100), RawValue::from(200)],
//!     ],
//! );
//!
//! let config = InferenceConfig::default();
//! let result = extract_sheet(&sheet, &config);
//! let blocks = aggregate_metrics(&result, &config).unwrap();
//! assert_eq!(blocks[0].percent, 50.0);
//! ```

pub mod aggregate;
pub mod blocks;
pub mod builder;
pub mod config;
pub mod extract;
pub mod header;
pub mod normalize;
pub mod orientation;
pub mod stats;
pub mod text;
pub mod typing;

pub use aggregate::{aggregate_metrics, aggregate_table, find_metric_columns, MetricColumns};
pub use blocks::{extract_blocks, synthesize_table};
pub use builder::{build_grid, GridBuilder};
pub use config::{InferenceConfig, KeywordSet};
pub use extract::{describe_columns, extract_sheet};
pub use header::{locate_header_by_density, locate_header_by_score, score_header_row};
pub use normalize::{normalize_cell, normalize_value};
pub use orientation::{consistency_scores, correct_orientation, is_consistent, should_transpose};
pub use stats::{numeric_columns, ColumnStats, NumericColumn};
pub use typing::{detect_column_type, parse_date_text};
