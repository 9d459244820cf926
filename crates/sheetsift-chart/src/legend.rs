//! Legend types

/// Chart legend
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legend {
    /// Position
    pub position: LegendPosition,
    /// Whether the legend is drawn
    pub display: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(LegendPosition::default())
    }
}

impl Legend {
    /// Create a visible legend
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            display: true,
        }
    }
}

/// Legend position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}
