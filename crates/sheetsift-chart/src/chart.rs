//! Chart types

use crate::axis::{Axis, AxisId};
use crate::legend::Legend;
use crate::series::DataSeries;

/// Base chart type; individual series may override it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartType {
    #[default]
    Bar,
    Line,
}

/// Chart definition
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Chart type
    pub chart_type: ChartType,
    /// Chart title
    pub title: Option<String>,
    /// Category labels along the X axis
    pub categories: Vec<String>,
    /// Data series
    pub series: Vec<DataSeries>,
    /// Value axis on the left
    pub primary_axis: Axis,
    /// Optional value axis on the right
    pub secondary_axis: Option<Axis>,
    /// Legend
    pub legend: Option<Legend>,
}

impl Chart {
    /// Create a new chart
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category labels
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// Whether any series plots against the secondary axis
    pub fn uses_secondary_axis(&self) -> bool {
        self.series.iter().any(|s| s.axis == AxisId::Secondary)
    }

    /// Find a series by name
    pub fn series_named(&self, name: &str) -> Option<&DataSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}
