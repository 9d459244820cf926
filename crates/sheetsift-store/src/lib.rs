//! # sheetsift-store
//!
//! A flat, append-only row store for imported tables, kept as one JSON file:
//!
//! ```json
//! { "files": [ { "id": 1, "filename": "...", ... } ],
//!   "dataRows": [ { "file_id": 1, "row_index": 0, "row_data": { ... } } ] }
//! ```
//!
//! Files are keyed by path; re-importing a path replaces its rows.

mod error;
mod record;
mod store;

pub use error::{StoreError, StoreResult};
pub use record::{
    sheet_rows, ColumnInfo, FileRecord, FileStatus, GlobalStats, RowData, RowRecord, RowView,
};
pub use store::{ImportedFile, RowStore, DEFAULT_PAGE_SIZE, DEFAULT_STORE_FILE};
