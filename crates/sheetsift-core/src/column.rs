//! Column descriptors and spreadsheet-style column names

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every sampled value is a finite number
    Number,
    /// Every sampled value is a valid date
    Date,
    /// Anything else, including columns with no samples
    #[default]
    Text,
}

impl ColumnType {
    /// Lowercase name as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, position and type of one grid column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Header text, or the column letter when the header cell is empty
    pub name: String,
    /// 0-based position in the final grid
    pub index: usize,
    /// Inferred type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new descriptor
    pub fn new<S: Into<String>>(name: S, index: usize, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            index,
            column_type,
        }
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_name(index: usize) -> String {
    let mut result = String::new();
    let mut n = index + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
pub fn column_index(letters: &str) -> Result<usize> {
    let letters = letters.trim();
    if letters.is_empty() {
        return Err(Error::InvalidColumnName("empty column letters".into()));
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnName(letters.to_string()));
        }
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(c.to_ascii_uppercase() as usize - 'A' as usize + 1))
            .ok_or_else(|| Error::InvalidColumnName(letters.to_string()))?;
    }

    Ok(col - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(1), "B");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(51), "AZ");
        assert_eq!(column_name(52), "BA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A").unwrap(), 0);
        assert_eq!(column_index("z").unwrap(), 25);
        assert_eq!(column_index("AA").unwrap(), 26);
        assert_eq!(column_index("AAA").unwrap(), 702);
        assert!(column_index("").is_err());
        assert!(column_index("A1").is_err());
    }

    #[test]
    fn test_column_type_serializes_lowercase() {
        let col = ColumnDescriptor::new("Age", 1, ColumnType::Number);
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(json, r#"{"name":"Age","index":1,"type":"number"}"#);
    }
}
