//! Records kept in the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sheetsift_core::SheetResult;

/// One row keyed by column name
pub type RowData = Map<String, Value>;

/// Import state of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    #[default]
    Imported,
}

/// An imported file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    pub filename: String,
    pub filepath: String,
    pub file_hash: String,
    pub import_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub row_count: usize,
    #[serde(default)]
    pub status: FileStatus,
}

/// A stored row of an imported file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub file_id: u64,
    pub row_index: usize,
    pub row_data: RowData,
}

/// A stored row joined with its file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub filename: String,
    pub import_date: Option<DateTime<Utc>>,
    pub row_index: usize,
    pub row_data: RowData,
}

/// Totals over the whole store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    pub total_files: usize,
    pub total_rows: usize,
    pub last_import: Option<DateTime<Utc>>,
}

/// A column name seen in stored rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
}

/// Rows of a sheet as `(grid index, {column name: value})`, header row
/// included. A repeated column name keeps its rightmost value.
pub fn sheet_rows(sheet: &SheetResult) -> Vec<(usize, RowData)> {
    let names = sheet.header();
    sheet
        .data
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let data = names
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let value = row
                        .get(col)
                        .and_then(|cell| cell.value.as_ref())
                        .and_then(|v| serde_json::to_value(v).ok())
                        .unwrap_or(Value::Null);
                    (name.clone(), value)
                })
                .collect();
            (index, data)
        })
        .collect()
}
