//! Cell-related types
//!
//! This module contains:
//! - [`Scalar`] - A resolved cell value
//! - [`Cell`] - A normalized value plus its style
//! - [`RawValue`] / [`RawCell`] - Reader-side values before normalization
//! - [`StyleInfo`] - Opaque style pass-through

mod raw;
mod style;
mod value;

pub use raw::{RawCell, RawValue, TextRun};
pub use style::StyleInfo;
pub use value::{CellError, Scalar, DATE_DISPLAY_FORMAT};

use serde::{Deserialize, Serialize};

/// A normalized cell: an optional scalar value and an optional style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Resolved value (`None` for empty cells)
    pub value: Option<Scalar>,
    /// Style passed through from the reader
    pub style: Option<StyleInfo>,
}

impl Cell {
    /// Create a cell holding a value
    pub fn new<V: Into<Scalar>>(value: V) -> Self {
        Self {
            value: Some(value.into()),
            style: None,
        }
    }

    /// An empty cell: no value, no style
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a style
    pub fn with_style(mut self, style: StyleInfo) -> Self {
        self.style = Some(style);
        self
    }

    /// True when the value is absent or a blank string
    pub fn is_empty(&self) -> bool {
        match &self.value {
            None => true,
            Some(v) => v.is_blank(),
        }
    }

    /// The value rendered as text, empty string when absent
    pub fn text(&self) -> String {
        self.value
            .as_ref()
            .map(|v| v.to_text().into_owned())
            .unwrap_or_default()
    }
}

impl From<Scalar> for Cell {
    fn from(value: Scalar) -> Self {
        Cell {
            value: Some(value),
            style: None,
        }
    }
}

impl From<Option<Scalar>> for Cell {
    fn from(value: Option<Scalar>) -> Self {
        Cell { value, style: None }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::new(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::new(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::new(n)
    }
}
