//! Cell normalizer: resolve reader-side cells to plain scalars

use sheetsift_core::{Cell, RawCell, RawValue, Scalar};

/// Resolve a raw value to the scalar a user would see in the cell.
///
/// - formulas yield their cached result, or nothing when the result is an error
/// - hyperlinks yield their display text, falling back to the target
/// - rich text yields the concatenated runs
/// - an error stored directly in a cell yields its display text
pub fn normalize_value(value: &RawValue) -> Option<Scalar> {
    match value {
        RawValue::Empty => None,
        RawValue::Number(n) => Some(Scalar::Number(*n)),
        RawValue::String(s) => Some(Scalar::String(s.clone())),
        RawValue::Boolean(b) => Some(Scalar::Boolean(*b)),
        RawValue::Date(d) => Some(Scalar::Date(*d)),
        RawValue::Error(e) => Some(Scalar::string(e.as_str())),
        RawValue::Formula { text, result } => match result.as_deref() {
            Some(RawValue::Error(e)) => {
                log::debug!("formula {text} evaluated to {e}, treating as empty");
                None
            }
            Some(inner) => normalize_value(inner),
            None => None,
        },
        RawValue::Hyperlink { text, target } => match text {
            Some(t) if !t.is_empty() => Some(Scalar::String(t.clone())),
            _ => Some(Scalar::String(target.clone())),
        },
        RawValue::RichText(runs) => Some(Scalar::String(
            runs.iter().map(|run| run.text.as_str()).collect(),
        )),
    }
}

/// Normalize a raw cell, passing its style through untouched
pub fn normalize_cell(cell: &RawCell) -> Cell {
    Cell {
        value: normalize_value(&cell.value),
        style: cell.style.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sheetsift_core::{CellError, StyleInfo, TextRun};

    #[test]
    fn test_plain_values_pass_through() {
        assert_eq!(normalize_value(&RawValue::Empty), None);
        assert_eq!(normalize_value(&RawValue::from(4.5)), Some(Scalar::Number(4.5)));
        assert_eq!(normalize_value(&RawValue::from("x")), Some(Scalar::from("x")));
        assert_eq!(normalize_value(&RawValue::from(true)), Some(Scalar::Boolean(true)));

        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(normalize_value(&RawValue::Date(date)), Some(Scalar::Date(date)));
    }

    #[test]
    fn test_formula_uses_cached_result() {
        let value = RawValue::formula("=A1*2", RawValue::from(84));
        assert_eq!(normalize_value(&value), Some(Scalar::Number(84.0)));

        let text = RawValue::formula("=B1", RawValue::from("abc"));
        assert_eq!(normalize_value(&text), Some(Scalar::from("abc")));
    }

    #[test]
    fn test_formula_error_becomes_empty() {
        let value = RawValue::formula("=1/0", RawValue::Error(CellError::Div0));
        assert_eq!(normalize_value(&value), None);

        let uncalculated = RawValue::Formula {
            text: "=A1".into(),
            result: None,
        };
        assert_eq!(normalize_value(&uncalculated), None);
    }

    #[test]
    fn test_hyperlink() {
        let with_text = RawValue::hyperlink(Some("Site"), "https://example.com");
        assert_eq!(normalize_value(&with_text), Some(Scalar::from("Site")));

        let bare = RawValue::hyperlink(None, "https://example.com");
        assert_eq!(normalize_value(&bare), Some(Scalar::from("https://example.com")));

        let blank_text = RawValue::hyperlink(Some(""), "mailto:a@b.c");
        assert_eq!(normalize_value(&blank_text), Some(Scalar::from("mailto:a@b.c")));
    }

    #[test]
    fn test_rich_text_is_concatenated() {
        let value = RawValue::RichText(vec![TextRun::new("CA "), TextRun::new("Réalisé")]);
        assert_eq!(normalize_value(&value), Some(Scalar::from("CA Réalisé")));
    }

    #[test]
    fn test_direct_error_keeps_its_text() {
        let value = RawValue::Error(CellError::Na);
        assert_eq!(normalize_value(&value), Some(Scalar::from("#N/A")));
    }

    #[test]
    fn test_style_is_kept() {
        let style = StyleInfo::new().with_number_format("0%");
        let cell = normalize_cell(&RawCell::new(0.5).with_style(style.clone()));
        assert_eq!(cell.value, Some(Scalar::Number(0.5)));
        assert_eq!(cell.style, Some(style));
    }
}
