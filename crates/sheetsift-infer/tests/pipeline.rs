//! End-to-end scenarios for the extraction and metric paths

use pretty_assertions::assert_eq;
use sheetsift_core::{Cell, ColumnType, MetricBlock, MetricError, RawSheet, RawValue, SheetResult};
use sheetsift_infer::{aggregate_metrics, extract_sheet, numeric_columns, InferenceConfig};

fn sheet(name: &str, rows: Vec<Vec<RawValue>>) -> RawSheet {
    RawSheet::from_rows(name, rows)
}

fn extract(name: &str, rows: Vec<Vec<RawValue>>) -> SheetResult {
    extract_sheet(&sheet(name, rows), &InferenceConfig::default())
}

fn s(text: &str) -> RawValue {
    RawValue::from(text)
}

fn n(value: i32) -> RawValue {
    RawValue::from(value)
}

#[test]
fn test_transposed_sheet_is_flipped() {
    let result = extract(
        "People",
        vec![
            vec![s("Name"), s("Alice"), s("Bob")],
            vec![s("Age"), n(25), n(30)],
            vec![s("City"), s("Paris"), s("London")],
        ],
    );

    assert_eq!(result.header(), vec!["Name", "Age", "City"]);
    assert_eq!(result.header_row, 0);
    assert_eq!(
        result.data_rows(),
        &[
            vec![Cell::from("Alice"), Cell::from(25), Cell::from("Paris")],
            vec![Cell::from("Bob"), Cell::from(30), Cell::from("London")],
        ]
    );
    let types: Vec<ColumnType> = result.columns.iter().map(|c| c.column_type).collect();
    assert_eq!(types, vec![ColumnType::Text, ColumnType::Number, ColumnType::Text]);
    assert_eq!(result.row_count, 3);
}

#[test]
fn test_column_indices_follow_final_grid() {
    let result = extract(
        "T",
        vec![
            vec![s("Name"), s("Alice"), s("Bob"), s("Carol")],
            vec![s("Age"), n(25), n(30), n(41)],
        ],
    );

    assert_eq!(result.columns.len(), result.data.column_count());
    for (i, column) in result.columns.iter().enumerate() {
        assert_eq!(column.index, i);
    }
}

#[test]
fn test_metrics_from_plain_table() {
    let result = extract(
        "Ventes",
        vec![
            vec![s("Magasin"), s("CA Réalisé"), s("Objectif")],
            vec![s("A"), n(100), n(200)],
            vec![s("B"), n(150), n(100)],
        ],
    );

    let blocks = aggregate_metrics(&result, &InferenceConfig::default()).unwrap();
    assert_eq!(
        blocks,
        vec![
            MetricBlock::new("A", 100.0, 200.0),
            MetricBlock::new("B", 150.0, 100.0),
        ]
    );
    assert_eq!(blocks[0].percent, 50.0);
    assert_eq!(blocks[1].percent, 150.0);
    assert!(blocks[1].target_met());
}

#[test]
fn test_unrecognized_headers_are_reported() {
    let result = extract(
        "Sales",
        vec![
            vec![s("Store"), s("Revenue"), s("Budget")],
            vec![s("A"), n(100), n(200)],
        ],
    );

    let err = aggregate_metrics(&result, &InferenceConfig::default()).unwrap_err();
    assert_eq!(err.code(), "columns-not-found");
    assert_eq!(
        err,
        MetricError::ColumnsNotFound {
            headers: vec!["Store".into(), "Revenue".into(), "Budget".into()],
        }
    );
}

#[test]
fn test_report_blocks_rebuilt_into_table() {
    let result = extract(
        "Rapport",
        vec![
            vec![s("STORE X")],
            vec![s("CA REALISE"), n(4224), n(8739)],
            vec![s("OBJECTIF"), n(5056), n(11712)],
        ],
    );

    let blocks = aggregate_metrics(&result, &InferenceConfig::default()).unwrap();
    assert_eq!(blocks, vec![MetricBlock::new("STORE X", 4224.0, 5056.0)]);
}

#[test]
fn test_several_report_blocks() {
    let result = extract(
        "Rapport",
        vec![
            vec![s("Lyon"), RawValue::Empty],
            vec![s("CA Réalisé"), n(80)],
            vec![s("Objectif"), n(100)],
            vec![s("Nice"), RawValue::Empty],
            vec![s("CA Réalisé"), n(120)],
            vec![s("Objectif"), n(100)],
        ],
    );

    let blocks = aggregate_metrics(&result, &InferenceConfig::default()).unwrap();
    let labels: Vec<&str> = blocks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Lyon", "Nice"]);
    assert_eq!(blocks[1].percent, 120.0);
}

#[test]
fn test_empty_sheet_has_no_data() {
    let result = extract_sheet(&RawSheet::new("Vide"), &InferenceConfig::default());
    assert!(result.empty);
    assert_eq!(result.header(), vec!["A"]);

    let err = aggregate_metrics(&result, &InferenceConfig::default()).unwrap_err();
    assert_eq!(err, MetricError::NoData);
    assert_eq!(err.code(), "no-data");
}

#[test]
fn test_header_only_sheet_has_no_data() {
    let result = extract("H", vec![vec![s("Magasin"), s("CA"), s("Objectif")]]);
    assert_eq!(
        aggregate_metrics(&result, &InferenceConfig::default()),
        Err(MetricError::NoData)
    );
}

#[test]
fn test_formula_cells_flow_through() {
    let result = extract(
        "F",
        vec![
            vec![s("Magasin"), s("CA"), s("Objectif")],
            vec![
                s("A"),
                RawValue::formula("=B3*2", RawValue::from(50)),
                RawValue::formula("=1/0", RawValue::Error(sheetsift_core::CellError::Div0)),
            ],
        ],
    );

    assert_eq!(result.data.cell(1, 1), Some(&Cell::from(50)));
    assert!(result.data.cell(1, 2).is_some_and(Cell::is_empty));

    let blocks = aggregate_metrics(&result, &InferenceConfig::default()).unwrap();
    assert_eq!(blocks, vec![MetricBlock::new("A", 50.0, 0.0)]);
    assert_eq!(blocks[0].percent, 0.0);
}

#[test]
fn test_numeric_columns_of_extracted_sheet() {
    let result = extract(
        "Ventes",
        vec![
            vec![s("Magasin"), s("CA"), s("Objectif")],
            vec![s("A"), n(100), n(200)],
            vec![s("B"), n(150), n(100)],
        ],
    );

    let columns = numeric_columns(&result, &InferenceConfig::default());
    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, vec!["CA", "Objectif"]);
    assert_eq!(columns[0].stats.sum, 250.0);
    assert_eq!(columns[1].stats.avg, 150.0);
}
