//! The JSON-file row store

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::record::{
    ColumnInfo, FileRecord, FileStatus, GlobalStats, RowData, RowRecord, RowView,
};

/// Default file name of the store
pub const DEFAULT_STORE_FILE: &str = "sheetsift-data.json";

/// Default page size of [`RowStore::rows`]
pub const DEFAULT_PAGE_SIZE: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct StoreData {
    files: Vec<FileRecord>,
    #[serde(rename = "dataRows")]
    data_rows: Vec<RowRecord>,
}

impl StoreData {
    fn add_file(&mut self, filename: &str, filepath: &str, file_hash: &str, row_count: usize) -> u64 {
        let now = Utc::now();
        let id = self.files.len() as u64 + 1;
        self.files.push(FileRecord {
            id,
            filename: filename.to_string(),
            filepath: filepath.to_string(),
            file_hash: file_hash.to_string(),
            import_date: now,
            last_modified: now,
            row_count,
            status: FileStatus::Imported,
        });
        id
    }

    fn update_file(&mut self, id: u64, file_hash: &str, row_count: usize) -> bool {
        let Some(file) = self.files.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        file.file_hash = file_hash.to_string();
        file.row_count = row_count;
        file.last_modified = Utc::now();
        true
    }

    fn add_rows(&mut self, file_id: u64, rows: impl IntoIterator<Item = (usize, RowData)>) -> usize {
        let before = self.data_rows.len();
        self.data_rows
            .extend(rows.into_iter().map(|(row_index, row_data)| RowRecord {
                file_id,
                row_index,
                row_data,
            }));
        self.data_rows.len() - before
    }

    fn delete_file_rows(&mut self, file_id: u64) -> usize {
        let before = self.data_rows.len();
        self.data_rows.retain(|r| r.file_id != file_id);
        before - self.data_rows.len()
    }
}

/// Outcome of [`RowStore::import_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportedFile {
    pub file_id: u64,
    /// Rows dropped from an earlier import of the same path, if there was one
    pub replaced_rows: Option<usize>,
}

/// Append-only store of imported files and their rows.
///
/// Every mutation is written through to the backing JSON file, if any, and
/// only becomes visible once that write succeeded.
#[derive(Debug, Default)]
pub struct RowStore {
    path: Option<PathBuf>,
    data: StoreData,
}

impl RowStore {
    /// A store that is never persisted
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store at `path`.
    ///
    /// A missing file gives an empty store. An unreadable or malformed file
    /// is logged and also gives an empty store, which replaces the file on
    /// the next write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            match Self::load(&path) {
                Ok(data) => {
                    log::debug!("loaded store from {}", path.display());
                    data
                }
                Err(e) => {
                    log::warn!("could not load store {}: {e}, starting empty", path.display());
                    StoreData::default()
                }
            }
        } else {
            StoreData::default()
        };
        Self {
            path: Some(path),
            data,
        }
    }

    fn load(path: &Path) -> StoreResult<StoreData> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the store to its file, replacing it atomically
    pub fn save(&self) -> StoreResult<()> {
        self.write(&self.data)
    }

    fn write(&self, data: &StoreData) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Apply `change` to a copy of the data, persist the copy and only then
    /// make it current. On a write error the store keeps its previous state.
    fn commit<T>(&mut self, change: impl FnOnce(&mut StoreData) -> T) -> StoreResult<T> {
        let mut staged = self.data.clone();
        let out = change(&mut staged);
        self.write(&staged)?;
        self.data = staged;
        Ok(out)
    }

    /// All imported files, in import order
    pub fn files(&self) -> &[FileRecord] {
        &self.data.files
    }

    /// The record of a previously imported path
    pub fn find_file(&self, filepath: &str) -> Option<&FileRecord> {
        self.data.files.iter().find(|f| f.filepath == filepath)
    }

    /// Record a newly imported file and return its id
    pub fn add_file(
        &mut self,
        filename: &str,
        filepath: &str,
        file_hash: &str,
        row_count: usize,
    ) -> StoreResult<u64> {
        self.commit(|data| data.add_file(filename, filepath, file_hash, row_count))
    }

    /// Refresh the hash and row count of a re-imported file. Returns false
    /// when no file has this id.
    pub fn update_file(&mut self, id: u64, file_hash: &str, row_count: usize) -> StoreResult<bool> {
        if !self.data.files.iter().any(|f| f.id == id) {
            return Ok(false);
        }
        self.commit(|data| data.update_file(id, file_hash, row_count))
    }

    /// Append rows of a file
    pub fn add_rows<I>(&mut self, file_id: u64, rows: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = (usize, RowData)>,
    {
        self.commit(|data| data.add_rows(file_id, rows))
    }

    /// Drop every row of a file, keeping its record. Returns the number removed.
    pub fn delete_file_rows(&mut self, file_id: u64) -> StoreResult<usize> {
        self.commit(|data| data.delete_file_rows(file_id))
    }

    /// Store the rows of an imported file in one write.
    ///
    /// A path seen before has its rows replaced and its record refreshed;
    /// otherwise a new record is added. Nothing changes if the write fails.
    pub fn import_file(
        &mut self,
        filename: &str,
        filepath: &str,
        file_hash: &str,
        rows: Vec<(usize, RowData)>,
    ) -> StoreResult<ImportedFile> {
        let existing = self.find_file(filepath).map(|f| f.id);
        self.commit(|data| {
            let row_count = rows.len();
            let (file_id, removed) = match existing {
                Some(id) => {
                    let removed = data.delete_file_rows(id);
                    data.update_file(id, file_hash, row_count);
                    (id, Some(removed))
                }
                None => (data.add_file(filename, filepath, file_hash, row_count), None),
            };
            data.add_rows(file_id, rows);
            ImportedFile {
                file_id,
                replaced_rows: removed,
            }
        })
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.data.data_rows.len()
    }

    /// File count, summed row counts and the most recent import
    pub fn global_stats(&self) -> GlobalStats {
        GlobalStats {
            total_files: self.data.files.len(),
            total_rows: self.data.files.iter().map(|f| f.row_count).sum(),
            last_import: self.data.files.last().map(|f| f.import_date),
        }
    }

    /// A page of stored rows joined with their file
    pub fn rows(&self, limit: usize, offset: usize) -> Vec<RowView> {
        self.data
            .data_rows
            .iter()
            .skip(offset)
            .take(limit)
            .map(|row| {
                let file = self.data.files.iter().find(|f| f.id == row.file_id);
                RowView {
                    filename: file.map_or_else(|| "Unknown".to_string(), |f| f.filename.clone()),
                    import_date: file.map(|f| f.import_date),
                    row_index: row.row_index,
                    row_data: row.row_data.clone(),
                }
            })
            .collect()
    }

    /// Every column name seen in stored rows, in order of first appearance
    pub fn columns(&self) -> Vec<ColumnInfo> {
        let mut seen = HashSet::new();
        self.data
            .data_rows
            .iter()
            .flat_map(|row| row.row_data.keys())
            .filter(|name| seen.insert(name.as_str()))
            .map(|name| ColumnInfo {
                column_name: name.clone(),
                data_type: "text".to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn row(value: Value) -> RowData {
        match value {
            Value::Object(map) => map,
            _ => RowData::new(),
        }
    }

    #[test]
    fn test_add_and_query() {
        let mut store = RowStore::in_memory();
        let id = store.add_file("a.xlsx", "/data/a.xlsx", "h1", 2).unwrap();
        assert_eq!(id, 1);

        store
            .add_rows(
                id,
                vec![
                    (0, row(json!({"Nom": "Nom", "Age": "Age"}))),
                    (1, row(json!({"Nom": "Alice", "Ville": "Lyon"}))),
                ],
            )
            .unwrap();

        let stats = store.global_stats();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.last_import, Some(store.files()[0].import_date));

        let names: Vec<String> = store.columns().into_iter().map(|c| c.column_name).collect();
        assert_eq!(names, vec!["Nom", "Age", "Ville"]);

        let page = store.rows(1, 1);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].filename, "a.xlsx");
        assert_eq!(page[0].row_index, 1);
    }

    #[test]
    fn test_reimport_replaces_rows() {
        let mut store = RowStore::in_memory();
        let a = store.add_file("a.csv", "/a.csv", "h1", 1).unwrap();
        let b = store.add_file("b.csv", "/b.csv", "h2", 1).unwrap();
        store.add_rows(a, vec![(0, row(json!({"x": 1})))]).unwrap();
        store.add_rows(b, vec![(0, row(json!({"x": 2})))]).unwrap();

        assert_eq!(store.delete_file_rows(a).unwrap(), 1);
        assert!(store.update_file(a, "h3", 5).unwrap());
        assert!(!store.update_file(42, "h", 0).unwrap());

        let file = store.find_file("/a.csv").unwrap();
        assert_eq!(file.file_hash, "h3");
        assert_eq!(file.row_count, 5);
        assert_eq!(store.row_count(), 1);
        assert_eq!(store.rows(10, 0)[0].filename, "b.csv");
    }

    #[test]
    fn test_import_file_adds_then_replaces() {
        let mut store = RowStore::in_memory();
        let first = store
            .import_file("a.csv", "/a.csv", "h1", vec![(0, row(json!({"x": 1}))), (1, row(json!({"x": 2})))])
            .unwrap();
        assert_eq!(first, ImportedFile { file_id: 1, replaced_rows: None });

        let again = store
            .import_file("a.csv", "/a.csv", "h2", vec![(0, row(json!({"x": 3})))])
            .unwrap();
        assert_eq!(again, ImportedFile { file_id: 1, replaced_rows: Some(2) });
        assert_eq!(store.files().len(), 1);
        assert_eq!(store.files()[0].row_count, 1);
        assert_eq!(store.files()[0].file_hash, "h2");
        assert_eq!(store.row_count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);

        let mut store = RowStore::open(&path);
        store
            .import_file("a.csv", "/a.csv", "h1", vec![(0, RowData::new()), (1, RowData::new())])
            .unwrap();

        // A directory in place of the temp file makes every write fail
        let tmp = path.with_extension("json.tmp");
        fs::create_dir(&tmp).unwrap();
        assert!(store.import_file("a.csv", "/a.csv", "h2", vec![]).is_err());
        assert!(store.delete_file_rows(1).is_err());
        assert!(store.add_file("b.csv", "/b.csv", "h3", 0).is_err());

        assert_eq!(store.row_count(), 2);
        assert_eq!(store.files().len(), 1);
        assert_eq!(store.files()[0].file_hash, "h1");

        fs::remove_dir(&tmp).unwrap();
        store.import_file("b.csv", "/b.csv", "h3", vec![(0, RowData::new())]).unwrap();

        let reopened = RowStore::open(&path);
        let a = reopened.find_file("/a.csv").unwrap();
        assert_eq!(a.row_count, 2);
        assert_eq!(reopened.row_count(), 3);
        assert_eq!(reopened.global_stats().total_rows, 3);
    }

    #[test]
    fn test_orphan_rows_are_unknown() {
        let mut store = RowStore::in_memory();
        store.add_rows(9, vec![(0, RowData::new())]).unwrap();
        let page = store.rows(DEFAULT_PAGE_SIZE, 0);
        assert_eq!(page[0].filename, "Unknown");
        assert_eq!(page[0].import_date, None);
    }

    #[test]
    fn test_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_STORE_FILE);

        let mut store = RowStore::open(&path);
        let id = store.add_file("a.xlsx", "/a.xlsx", "h", 1).unwrap();
        store.add_rows(id, vec![(0, row(json!({"k": "v"})))]).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["files"][0]["status"], "imported");
        assert_eq!(raw["dataRows"][0]["row_data"]["k"], "v");

        let reopened = RowStore::open(&path);
        assert_eq!(reopened.files().len(), 1);
        assert_eq!(reopened.row_count(), 1);
        assert_eq!(reopened.path(), Some(path.as_path()));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = RowStore::open(&path);
        assert!(store.files().is_empty());
        assert_eq!(store.row_count(), 0);
    }
}
