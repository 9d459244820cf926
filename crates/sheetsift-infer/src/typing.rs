//! Column typing by sampling

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sheetsift_core::{numeric, Cell, ColumnType, Scalar};

use crate::config::InferenceConfig;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse date text in the common ISO and US layouts
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn is_finite_number(value: &Scalar) -> bool {
    match value {
        Scalar::Number(n) => n.is_finite(),
        Scalar::String(s) => {
            numeric::parse_float_prefix(s).is_some()
                && numeric::parse_strict_number(s).is_some_and(f64::is_finite)
        }
        Scalar::Boolean(_) | Scalar::Date(_) => false,
    }
}

fn is_date(value: &Scalar) -> bool {
    match value {
        Scalar::Date(_) => true,
        // a number reads as a timestamp
        Scalar::Number(n) => n.is_finite(),
        Scalar::String(s) => parse_date_text(s).is_some(),
        Scalar::Boolean(_) => false,
    }
}

/// Classify column `col` of `rows` from its first non-empty values.
///
/// `number` only when every sample is a finite number, then `date` when every
/// sample is a date, otherwise `text`. No samples means `text`.
pub fn detect_column_type(rows: &[Vec<Cell>], col: usize, config: &InferenceConfig) -> ColumnType {
    let samples: Vec<&Scalar> = rows
        .iter()
        .filter_map(|row| row.get(col))
        .filter(|cell| !cell.is_empty())
        .filter_map(|cell| cell.value.as_ref())
        .take(config.type_sample_size)
        .collect();

    if samples.is_empty() {
        ColumnType::Text
    } else if samples.iter().all(|v| is_finite_number(v)) {
        ColumnType::Number
    } else if samples.iter().all(|v| is_date(v)) {
        ColumnType::Date
    } else {
        ColumnType::Text
    }
}
