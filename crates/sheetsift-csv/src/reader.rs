//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetsift_core::{CellError, RawCell, RawSheet, RawValue};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<RawSheet> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sheet1".to_string());
        let file = File::open(path)?;
        Self::read(file, name, options)
    }

    /// Read CSV from a reader into a sheet. Every record, the first one
    /// included, becomes a row.
    pub fn read<R: Read, S: Into<String>>(
        reader: R,
        name: S,
        options: &CsvReadOptions,
    ) -> CsvResult<RawSheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(options.flexible)
            .from_reader(reader);

        let mut sheet = RawSheet::new(name);
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;

            for (col, field) in record.iter().enumerate() {
                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else if field.is_empty() {
                    RawValue::Empty
                } else {
                    RawValue::String(field.to_string())
                };
                sheet.push(row, col, RawCell::new(value));
            }
        }

        log::debug!("read {} csv cells into {:?}", sheet.cell_count(), sheet.name);
        Ok(sheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> RawValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return RawValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return RawValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return RawValue::Boolean(false);
        }

        if let Ok(error) = trimmed.parse::<CellError>() {
            return RawValue::Error(error);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return RawValue::Number(n);
            }
        }

        RawValue::String(field.to_string())
    }
}
