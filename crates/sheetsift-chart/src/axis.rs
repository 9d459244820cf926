//! Axis types

/// Which value axis a series uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisId {
    #[default]
    Primary,
    Secondary,
}

/// Value axis
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    /// Axis title
    pub title: Option<String>,
    /// Lower bound the renderer should show at least
    pub suggested_min: Option<f64>,
    /// Upper bound the renderer should show at least
    pub suggested_max: Option<f64>,
    /// Position
    pub position: AxisPosition,
}

impl Axis {
    /// Create a new axis
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Set axis title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the suggested bounds; data outside them still widens the axis
    pub fn with_suggested_bounds(mut self, min: f64, max: f64) -> Self {
        self.suggested_min = Some(min);
        self.suggested_max = Some(max);
        self
    }
}

/// Axis position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
}
