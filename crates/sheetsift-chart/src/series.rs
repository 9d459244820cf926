//! Data series types

use crate::axis::AxisId;
use crate::chart::ChartType;

/// Stroke of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Data series for a chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSeries {
    /// Series name, shown in the legend
    pub name: String,
    /// Rendering of this series, when it differs from the chart's
    pub series_type: Option<ChartType>,
    /// One value per chart category
    pub values: Vec<f64>,
    /// Axis the values are plotted against
    pub axis: AxisId,
    /// Line stroke
    pub line_style: LineStyle,
}

impl DataSeries {
    /// Create a series plotted on the primary axis
    pub fn new<S: Into<String>>(name: S, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            series_type: None,
            values,
            axis: AxisId::Primary,
            line_style: LineStyle::Solid,
        }
    }

    /// Render this series as another chart type
    pub fn as_type(mut self, series_type: ChartType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    /// Plot against the given axis
    pub fn on_axis(mut self, axis: AxisId) -> Self {
        self.axis = axis;
        self
    }

    /// Draw with a dashed stroke
    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }
}
