//! Workbook reading
//!
//! Spreadsheet formats are decoded with calamine, CSV with the sheetsift CSV
//! reader. Either way the result is one [`RawSheet`] per worksheet, in
//! workbook order, ready for extraction.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, CellErrorType, Data, Range, Reader};
use sheetsift_core::{CellError, RawCell, RawSheet, RawValue, StyleInfo};
use sheetsift_csv::{CsvReadOptions, CsvReader};

use crate::error::{Error, Result};

/// Input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xlsx,
    Xlsm,
    Xlsb,
    Xls,
    Ods,
    Csv,
}

impl WorkbookFormat {
    /// Format for a file extension, ignoring case
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "xlsm" => Some(Self::Xlsm),
            "xlsb" => Some(Self::Xlsb),
            "xls" => Some(Self::Xls),
            "ods" => Some(Self::Ods),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Format of a path, from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xlsm => "xlsm",
            Self::Xlsb => "xlsb",
            Self::Xls => "xls",
            Self::Ods => "ods",
            Self::Csv => "csv",
        }
    }
}

/// Supplies cell styles the workbook reader does not decode
pub trait StyleExtractor {
    /// Style of the cell at a 0-based position, if any
    fn style(&self, sheet: &str, row: usize, col: usize) -> Option<StyleInfo>;
}

/// Style extractor that supplies nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleExtractor for NoStyles {
    fn style(&self, _sheet: &str, _row: usize, _col: usize) -> Option<StyleInfo> {
        None
    }
}

/// A workbook read into memory
#[derive(Debug, Clone)]
pub struct Workbook {
    format: WorkbookFormat,
    sheets: Vec<RawSheet>,
}

impl Workbook {
    /// Assemble a workbook from already-read sheets
    pub fn new(format: WorkbookFormat, sheets: Vec<RawSheet>) -> Self {
        Self { format, sheets }
    }

    /// Decode a workbook held in memory. A CSV input yields one sheet named
    /// "Sheet1".
    pub fn from_bytes(bytes: Vec<u8>, format: WorkbookFormat) -> Result<Self> {
        Self::parse(bytes, format, "Sheet1")
    }

    /// Read and decode a workbook file. A CSV input yields one sheet named
    /// after the file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = WorkbookFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        let bytes = std::fs::read(path)?;
        Self::parse(bytes, format, &csv_sheet_name(path))
    }

    pub(crate) fn parse(bytes: Vec<u8>, format: WorkbookFormat, csv_name: &str) -> Result<Self> {
        let sheets = match format {
            WorkbookFormat::Csv => vec![CsvReader::read(
                bytes.as_slice(),
                csv_name,
                &CsvReadOptions::default(),
            )?],
            _ => read_spreadsheet(bytes)?,
        };
        Ok(Self { format, sheets })
    }

    /// Attach styles from an external extractor to every cell
    pub fn apply_styles(&mut self, extractor: &dyn StyleExtractor) {
        for sheet in &mut self.sheets {
            let name = sheet.name.clone();
            for (row, col, cell) in sheet.cells_mut() {
                cell.style = extractor.style(&name, row, col);
            }
        }
    }

    /// Input format
    pub fn format(&self) -> WorkbookFormat {
        self.format
    }

    /// Sheets in workbook order
    pub fn sheets(&self) -> &[RawSheet] {
        &self.sheets
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Find a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the workbook has no sheet
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Read a workbook file into memory and decode it off the async runtime
pub async fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let format = WorkbookFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    let bytes = tokio::fs::read(path).await?;
    parse_blocking(bytes, format, csv_sheet_name(path)).await
}

pub(crate) async fn parse_blocking(
    bytes: Vec<u8>,
    format: WorkbookFormat,
    csv_name: String,
) -> Result<Workbook> {
    tokio::task::spawn_blocking(move || Workbook::parse(bytes, format, &csv_name)).await?
}

pub(crate) fn csv_sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string())
}

fn read_spreadsheet(bytes: Vec<u8>) -> Result<Vec<RawSheet>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let names = workbook.sheet_names();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let formulas = match workbook.worksheet_formula(&name) {
            Ok(formulas) => Some(formulas),
            Err(e) => {
                tracing::debug!("No formulas read for sheet {name}: {e}");
                None
            }
        };
        sheets.push(raw_sheet(&name, &range, formulas.as_ref()));
    }
    Ok(sheets)
}

/// Convert a decoded range, wrapping cells that hold a formula so the cached
/// value is kept as the formula's result
fn raw_sheet(name: &str, range: &Range<Data>, formulas: Option<&Range<String>>) -> RawSheet {
    let mut sheet = RawSheet::new(name);
    let Some((first_row, first_col)) = range.start() else {
        return sheet;
    };

    for (r, c, data) in range.cells() {
        let row = first_row as usize + r;
        let col = first_col as usize + c;
        let value = convert(data);

        let formula = formulas
            .and_then(|f| f.get_value((row as u32, col as u32)))
            .filter(|f| !f.is_empty());
        let value = match formula {
            Some(text) => RawValue::Formula {
                text: format!("={text}"),
                result: (!value.is_empty()).then(|| Box::new(value)),
            },
            None => value,
        };
        sheet.push(row, col, RawCell::new(value));
    }
    sheet
}

fn convert(data: &Data) -> RawValue {
    match data {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::String(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Boolean(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => RawValue::Date(dt),
            None => RawValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match sheetsift_infer::parse_date_text(s) {
            Some(dt) => RawValue::Date(dt),
            None => RawValue::String(s.clone()),
        },
        Data::DurationIso(s) => RawValue::String(s.clone()),
        Data::Error(e) => RawValue::Error(convert_error(e)),
    }
}

fn convert_error(error: &CellErrorType) -> CellError {
    match error {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}
