//! Importing spreadsheet files into a row store

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use sheetsift_core::{ColumnDescriptor, SheetResult};
use sheetsift_csv::CsvWriteOptions;
use sheetsift_infer::InferenceConfig;
use sheetsift_store::{sheet_rows, ImportedFile, RowStore};

use crate::error::{Error, Result};
use crate::export::export_csv;
use crate::extract_workbook;
use crate::reader::{csv_sheet_name, Workbook, WorkbookFormat};

/// Hex SHA-256 of file content
pub fn file_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Import settings
#[derive(Debug, Clone)]
pub struct ImporterOptions {
    /// Write a CSV copy of each sheet next to the source (never for CSV sources)
    pub export_csv: bool,
    /// Options for the CSV copies
    pub csv: CsvWriteOptions,
}

impl Default for ImporterOptions {
    fn default() -> Self {
        Self {
            export_csv: true,
            csv: CsvWriteOptions::default(),
        }
    }
}

/// What importing one file produced
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// Rows of the primary sheet were stored
    Imported(ImportSummary),
    /// The primary sheet had no content; the store was left untouched
    NoContent,
}

impl ImportOutcome {
    /// Short status line
    pub fn message(&self) -> String {
        match self {
            ImportOutcome::Imported(summary) => format!(
                "Imported {} rows from {}",
                summary.row_count, summary.filename
            ),
            ImportOutcome::NoContent => "No content found in Excel file".to_string(),
        }
    }
}

/// Details of a successful import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub file_id: u64,
    pub filename: String,
    /// Rows stored for the primary sheet, header row included
    pub row_count: usize,
    /// Columns of the primary sheet
    pub columns: Vec<ColumnDescriptor>,
    /// Number of sheets in the workbook
    pub sheets: usize,
    /// CSV copies written
    pub exported: Vec<PathBuf>,
    /// Whether rows of an earlier import of the same path were replaced
    pub replaced: bool,
}

/// Result of importing every spreadsheet in a folder
#[derive(Debug, Default)]
pub struct FolderReport {
    pub imported: Vec<(PathBuf, ImportOutcome)>,
    pub failed: Vec<(PathBuf, Error)>,
}

/// Extracts workbooks and records their primary sheet in a [`RowStore`]
pub struct Importer {
    store: RowStore,
    config: InferenceConfig,
    options: ImporterOptions,
}

impl Importer {
    /// Create an importer with default options
    pub fn new(store: RowStore, config: InferenceConfig) -> Self {
        Self::with_options(store, config, ImporterOptions::default())
    }

    pub fn with_options(store: RowStore, config: InferenceConfig, options: ImporterOptions) -> Self {
        Self {
            store,
            config,
            options,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn into_store(self) -> RowStore {
        self.store
    }

    /// Import one file.
    ///
    /// A path imported before has its rows replaced and its record refreshed.
    /// The store is written once, after the new content has been read; if
    /// that write fails the store keeps its previous state.
    pub async fn process_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportOutcome> {
        let path = path.as_ref();
        let format = WorkbookFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        tracing::info!("Processing file {}", path.display());

        let bytes = tokio::fs::read(path).await?;
        let csv_name = csv_sheet_name(path);
        let config = self.config.clone();
        let (hash, workbook, sheets) = tokio::task::spawn_blocking(move || {
            let hash = file_hash(&bytes);
            let workbook = Workbook::parse(bytes, format, &csv_name)?;
            let sheets = extract_workbook(&workbook, &config);
            Ok::<_, Error>((hash, workbook, sheets))
        })
        .await??;

        let exported = if self.options.export_csv && format != WorkbookFormat::Csv {
            export_csv(&workbook, path, &self.options.csv).await
        } else {
            Vec::new()
        };

        let sheet_count = sheets.len();
        let Some(primary) = sheets.into_iter().next().filter(SheetResult::has_content) else {
            tracing::warn!("No content found in {}", path.display());
            return Ok(ImportOutcome::NoContent);
        };

        let columns = primary.columns.clone();
        let filepath = path.to_string_lossy().into_owned();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| filepath.clone());

        let (row_count, imported) = self
            .store_rows(filename.clone(), filepath, hash, primary)
            .await?;
        if let Some(removed) = imported.replaced_rows {
            tracing::debug!("Replaced {removed} rows of {filename}");
        }
        tracing::info!("Imported {row_count} rows from {filename}");

        Ok(ImportOutcome::Imported(ImportSummary {
            file_id: imported.file_id,
            filename,
            row_count,
            columns,
            sheets: sheet_count,
            exported,
            replaced: imported.replaced_rows.is_some(),
        }))
    }

    /// Write the rows of a sheet to the store off the async runtime
    async fn store_rows(
        &mut self,
        filename: String,
        filepath: String,
        hash: String,
        sheet: SheetResult,
    ) -> Result<(usize, ImportedFile)> {
        let path = self.store.path().map(Path::to_path_buf);
        let mut store = std::mem::take(&mut self.store);
        let task = tokio::task::spawn_blocking(move || {
            let rows = sheet_rows(&sheet);
            let row_count = rows.len();
            let result = store.import_file(&filename, &filepath, &hash, rows);
            (store, result.map(|imported| (row_count, imported)))
        });

        match task.await {
            Ok((store, result)) => {
                self.store = store;
                Ok(result?)
            }
            Err(e) => {
                // The task took the store down with it; reload the last write
                self.store = path.map(RowStore::open).unwrap_or_default();
                Err(e.into())
            }
        }
    }

    /// Import every spreadsheet directly inside `dir`, in file name order.
    /// A file that fails is reported and does not stop the others.
    pub async fn process_folder<P: AsRef<Path>>(&mut self, dir: P) -> Result<FolderReport> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && WorkbookFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();
        tracing::info!("Found {} spreadsheet files in {}", paths.len(), dir.display());

        let mut report = FolderReport::default();
        for path in paths {
            match self.process_file(&path).await {
                Ok(outcome) => report.imported.push((path, outcome)),
                Err(e) => {
                    tracing::warn!("Error processing {}: {e}", path.display());
                    report.failed.push((path, e));
                }
            }
        }
        Ok(report)
    }
}
