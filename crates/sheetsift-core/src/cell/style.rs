//! Opaque cell style descriptor

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Style descriptor carried alongside a cell.
///
/// The pipeline never interprets these fields; they are passed through from
/// whatever style extractor produced them to the consumers of a sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleInfo {
    /// Border description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Value>,
    /// Font description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Value>,
    /// Fill description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Value>,
    /// Alignment description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Value>,
    /// Number format code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl StyleInfo {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number format code
    pub fn with_number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.number_format = Some(code.into());
        self
    }

    /// Set the font description
    pub fn with_font(mut self, font: Value) -> Self {
        self.font = Some(font);
        self
    }
}
