//! Reader-side cell values
//!
//! A [`RawCell`] is what a workbook reader hands to the pipeline before any
//! normalization: it may still hold a formula with its cached result, a
//! hyperlink, rich text runs or an error value.

use chrono::NaiveDateTime;

use super::{CellError, StyleInfo};

/// One run of a rich-text cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    /// Text of the run
    pub text: String,
}

impl TextRun {
    /// Create a new run
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// A cell value as produced by a workbook reader
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Explicitly empty cell
    #[default]
    Empty,

    /// Numeric value
    Number(f64),

    /// String value
    String(String),

    /// Boolean value
    Boolean(bool),

    /// Date or date-time value
    Date(NaiveDateTime),

    /// Error value stored directly in the cell
    Error(CellError),

    /// Formula with its last computed result
    Formula {
        /// Formula text (e.g. "=SUM(A1:A10)")
        text: String,
        /// Cached result, if the workbook stored one
        result: Option<Box<RawValue>>,
    },

    /// Hyperlink with optional display text
    Hyperlink {
        /// Display text
        text: Option<String>,
        /// Link target
        target: String,
    },

    /// Rich text made of styled runs
    RichText(Vec<TextRun>),
}

impl RawValue {
    /// Create a formula value with a cached result
    pub fn formula<S: Into<String>>(text: S, result: RawValue) -> Self {
        RawValue::Formula {
            text: text.into(),
            result: Some(Box::new(result)),
        }
    }

    /// Create a hyperlink value
    pub fn hyperlink<T: Into<String>>(text: Option<&str>, target: T) -> Self {
        RawValue::Hyperlink {
            text: text.map(str::to_string),
            target: target.into(),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(d: NaiveDateTime) -> Self {
        RawValue::Date(d)
    }
}

/// A raw value together with the style the reader attached to it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawCell {
    /// Unresolved value
    pub value: RawValue,
    /// Opaque style supplied by a style extractor
    pub style: Option<StyleInfo>,
}

impl RawCell {
    /// Create a raw cell without style
    pub fn new<V: Into<RawValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            style: None,
        }
    }

    /// Attach a style
    pub fn with_style(mut self, style: StyleInfo) -> Self {
        self.style = Some(style);
        self
    }
}

impl From<RawValue> for RawCell {
    fn from(value: RawValue) -> Self {
        RawCell::new(value)
    }
}
