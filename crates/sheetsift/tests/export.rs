//! CSV export of workbook sheets

use std::fs;

use pretty_assertions::assert_eq;
use sheetsift::{export_csv, CsvWriteOptions, RawSheet, Workbook, WorkbookFormat};
use tempfile::TempDir;

#[tokio::test]
async fn test_export_every_sheet_with_content() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("rapport.xlsx");

    let workbook = Workbook::new(
        WorkbookFormat::Xlsx,
        vec![
            RawSheet::from_rows("Synthèse", vec![vec!["Nom", "Total"]]),
            RawSheet::new("Vide"),
            RawSheet::from_rows("Détail", vec![vec!["Lyon"], vec!["Nice"]]),
        ],
    );

    let written = export_csv(&workbook, &source, &CsvWriteOptions::default()).await;
    assert_eq!(
        written,
        vec![
            dir.path().join("rapport.csv"),
            dir.path().join("rapport-Détail.csv"),
        ]
    );
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "Nom,Total\n");
    assert_eq!(fs::read_to_string(&written[1]).unwrap(), "Lyon\nNice\n");
}

#[tokio::test]
async fn test_export_failure_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("missing-dir").join("rapport.xlsx");
    let workbook = Workbook::new(
        WorkbookFormat::Xlsx,
        vec![RawSheet::from_rows("S", vec![vec!["x"]])],
    );

    let written = export_csv(&workbook, &source, &CsvWriteOptions::default()).await;
    assert!(written.is_empty());
}
