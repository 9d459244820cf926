//! Text helpers shared by the heuristics

use lazy_regex::regex_is_match;
use sheetsift_core::{numeric, Cell, Scalar};

/// Lowercased, whitespace-collapsed concatenation of every cell of a row
pub fn row_signature(row: &[Cell]) -> String {
    let joined = row
        .iter()
        .filter(|c| !c.is_empty())
        .map(Cell::text)
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined).to_lowercase()
}

/// Replace runs of whitespace with a single space and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `haystack` contains any of `needles` (all expected lowercase)
pub fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| !n.is_empty() && haystack.contains(n.as_str()))
}

/// Trimmed text of a cell
pub fn label(cell: &Cell) -> String {
    cell.text().trim().to_string()
}

/// "Ligne 12"-style filler labels generated by report tools, anywhere in the text
pub fn mentions_placeholder(s: &str) -> bool {
    regex_is_match!(r"(?i)ligne\s*\d+", s)
}

/// Whether the text starts with a "Ligne N" filler label
pub fn is_placeholder(s: &str) -> bool {
    regex_is_match!(r"(?i)^ligne\s*\d+", s.trim())
}

/// Numeric reading of a cell for report amounts: numbers as-is, strings
/// parsed leniently ("4 224,5"), anything else absent
pub fn amount(cell: &Cell) -> Option<f64> {
    match &cell.value {
        Some(Scalar::Number(n)) if n.is_finite() => Some(*n),
        Some(Scalar::String(s)) => numeric::parse_lenient_number(s).filter(|n| n.is_finite()),
        _ => None,
    }
}
