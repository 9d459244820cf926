//! # sheetsift-chart
//!
//! Chart descriptions built from metric blocks, for a renderer to draw.
//!
//! Each store gets a combo chart comparing its actual amount to its target
//! (bars on the left axis) with the completion percentage as a dashed line on
//! the right axis. [`Gallery`] filters and orders those charts.

mod axis;
mod chart;
mod error;
mod gallery;
mod legend;
mod series;
mod store;

pub use axis::{Axis, AxisId, AxisPosition};
pub use chart::{Chart, ChartType};
pub use error::{ChartError, ChartResult};
pub use gallery::{Gallery, GallerySort, SortCriteria, SortDirection};
pub use legend::{Legend, LegendPosition};
pub use series::{DataSeries, LineStyle};
pub use store::{StoreChart, StoreChartLabels};
