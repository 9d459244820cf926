//! Normalized cell values

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Format used when a date has to be rendered as text
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A resolved cell value.
///
/// Formulas, hyperlinks and rich text never appear here; they are resolved to
/// one of these scalars by the cell normalizer. An absent value is modelled as
/// `Option::<Scalar>::None` on [`Cell`](super::Cell).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value
    Number(f64),

    /// Date or date-time value
    Date(NaiveDateTime),

    /// String value
    String(String),
}

impl Scalar {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        Scalar::String(s.into())
    }

    /// Create a date value at midnight
    pub fn date(date: NaiveDate) -> Self {
        Scalar::Date(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Try to get the value as a number (no string parsing)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is a string made only of whitespace (or nothing)
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::String(s) if s.trim().is_empty())
    }

    /// Render the value as text, borrowing when it already is a string
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Date(d) => write!(f, "{}", d.format(DATE_DISPLAY_FORMAT)),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::string(s)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(d: NaiveDateTime) -> Self {
        Scalar::Date(d)
    }
}

/// Excel error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// #GETTING_DATA - External data is loading
    GettingData,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
            CellError::GettingData => "#GETTING_DATA",
        }
    }
}

impl FromStr for CellError {
    type Err = Error;

    /// Parse an error display string, ignoring case and surrounding spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "#NULL!" => Ok(CellError::Null),
            "#DIV/0!" => Ok(CellError::Div0),
            "#VALUE!" => Ok(CellError::Value),
            "#REF!" => Ok(CellError::Ref),
            "#NAME?" => Ok(CellError::Name),
            "#NUM!" => Ok(CellError::Num),
            "#N/A" => Ok(CellError::Na),
            "#GETTING_DATA" => Ok(CellError::GettingData),
            _ => Err(Error::InvalidCellError(s.to_string())),
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
