//! Per-store combo charts

use sheetsift_core::MetricBlock;

use crate::axis::{Axis, AxisId, AxisPosition};
use crate::chart::{Chart, ChartType};
use crate::legend::{Legend, LegendPosition};
use crate::series::DataSeries;

/// Captions used on store charts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreChartLabels {
    pub actual_category: String,
    pub target_category: String,
    pub amount_series: String,
    pub percent_series: String,
}

impl Default for StoreChartLabels {
    fn default() -> Self {
        Self {
            actual_category: "CA Réalisé".into(),
            target_category: "Objectif".into(),
            amount_series: "Montant (€)".into(),
            percent_series: "% Réalisation".into(),
        }
    }
}

/// Upper bound suggested for the percentage axis
const PERCENT_AXIS_MAX: f64 = 120.0;

/// A metric block with its chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreChart {
    pub label: String,
    pub actual: f64,
    pub target: f64,
    pub percent: f64,
    pub chart: Chart,
}

impl StoreChart {
    /// Build the chart of one block with the default captions
    pub fn from_block(block: &MetricBlock) -> Self {
        Self::with_labels(block, &StoreChartLabels::default())
    }

    /// Build the chart of one block.
    ///
    /// Bars compare actual and target on the left axis; the percentage is
    /// repeated over both categories as a dashed line on the right axis.
    pub fn with_labels(block: &MetricBlock, labels: &StoreChartLabels) -> Self {
        let mut chart = Chart::new(ChartType::Bar)
            .with_title(block.label.clone())
            .with_categories([labels.actual_category.as_str(), labels.target_category.as_str()]);

        chart.add_series(DataSeries::new(
            labels.amount_series.clone(),
            vec![block.actual_value, block.target_value],
        ));
        chart.add_series(
            DataSeries::new(labels.percent_series.clone(), vec![block.percent, block.percent])
                .as_type(ChartType::Line)
                .on_axis(AxisId::Secondary)
                .dashed(),
        );
        chart.primary_axis = Axis::new(AxisPosition::Left).with_title(labels.amount_series.clone());
        chart.secondary_axis = Some(
            Axis::new(AxisPosition::Right)
                .with_title(labels.percent_series.clone())
                .with_suggested_bounds(0.0, PERCENT_AXIS_MAX),
        );
        chart.legend = Some(Legend::new(LegendPosition::Top));

        Self {
            label: block.label.clone(),
            actual: block.actual_value,
            target: block.target_value,
            percent: block.percent,
            chart,
        }
    }

    /// Build one chart per block, in block order
    pub fn from_blocks(blocks: &[MetricBlock]) -> Vec<Self> {
        blocks.iter().map(Self::from_block).collect()
    }

    /// Percentage with one decimal ("83.5%"), or "N/A" without a target
    pub fn percent_label(&self) -> String {
        if self.target > 0.0 {
            format!("{:.1}%", self.percent)
        } else {
            "N/A".to_string()
        }
    }

    /// Whether the target is reached
    pub fn target_met(&self) -> bool {
        self.percent >= 100.0
    }
}
