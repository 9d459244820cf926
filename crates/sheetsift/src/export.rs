//! CSV export of workbook sheets

use std::path::{Path, PathBuf};

use sheetsift_csv::{CsvResult, CsvWriteOptions, CsvWriter};
use sheetsift_core::Grid;
use sheetsift_infer::GridBuilder;

use crate::reader::Workbook;

/// Where the CSV export of a sheet goes.
///
/// The first sheet, or the only one, becomes `<base>.csv` next to the source;
/// other sheets become `<base>-<sheet name>.csv`.
pub fn csv_export_path(source: &Path, sheet_name: &str, index: usize, sheet_count: usize) -> PathBuf {
    let base = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = if index == 0 || sheet_count == 1 {
        format!("{base}.csv")
    } else {
        let sheet: String = sheet_name
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{base}-{sheet}.csv")
    };
    match source.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Render a grid as CSV bytes
pub fn render_csv(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<Vec<u8>> {
    let mut out = Vec::new();
    CsvWriter::write(grid, &mut out, options)?;
    Ok(out)
}

/// Export every sheet with content next to `source`.
///
/// Sheets are written as read, before orientation correction. A sheet that
/// fails to render or write is logged and skipped. Returns the written paths.
pub async fn export_csv(
    workbook: &Workbook,
    source: &Path,
    options: &CsvWriteOptions,
) -> Vec<PathBuf> {
    let count = workbook.len();
    let mut written = Vec::new();

    for (index, sheet) in workbook.sheets().iter().enumerate() {
        let Some(grid) = GridBuilder::from_sheet(sheet).build() else {
            tracing::debug!("Sheet {} is empty, not exported", sheet.name);
            continue;
        };
        let path = csv_export_path(source, &sheet.name, index, count);

        let bytes = match render_csv(&grid, options) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to render sheet {} as CSV: {e}", sheet.name);
                continue;
            }
        };
        match tokio::fs::write(&path, bytes).await {
            Ok(()) => {
                tracing::info!("CSV exported to {}", path.display());
                written.push(path);
            }
            Err(e) => tracing::warn!("Failed to write {}: {e}", path.display()),
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetsift_core::Cell;

    #[test]
    fn test_first_sheet_takes_base_name() {
        let source = Path::new("/data/ventes.xlsx");
        assert_eq!(
            csv_export_path(source, "Janvier", 0, 3),
            PathBuf::from("/data/ventes.csv")
        );
        assert_eq!(
            csv_export_path(source, "Janvier", 0, 1),
            PathBuf::from("/data/ventes.csv")
        );
    }

    #[test]
    fn test_other_sheets_are_suffixed() {
        let source = Path::new("/data/ventes.v2.xlsx");
        assert_eq!(
            csv_export_path(source, "Février", 1, 3),
            PathBuf::from("/data/ventes.v2-Février.csv")
        );
        assert_eq!(
            csv_export_path(source, "T1/T2", 2, 3),
            PathBuf::from("/data/ventes.v2-T1_T2.csv")
        );
    }

    #[test]
    fn test_bare_file_name() {
        assert_eq!(
            csv_export_path(Path::new("book.ods"), "S", 1, 2),
            PathBuf::from("book-S.csv")
        );
    }

    #[test]
    fn test_render_csv() {
        let grid = Grid::from_values(vec![
            vec![Cell::from("Nom"), Cell::from("Age")],
            vec![Cell::from("Alice"), Cell::from(30)],
        ]);
        let bytes = render_csv(&grid, &CsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Nom,Age\nAlice,30\n");
    }
}
