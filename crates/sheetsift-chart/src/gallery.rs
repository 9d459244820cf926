//! Filtering and ordering of store charts

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, ChartResult};
use crate::store::StoreChart;

/// What charts are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    /// Store label
    #[default]
    Name,
    /// Actual amount ("sum")
    Actual,
    /// Completion percentage ("avg")
    Percent,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort order, written `<criteria>-<direction>` (`name-asc`, `sum-desc`,
/// `avg-asc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GallerySort {
    pub criteria: SortCriteria,
    pub direction: SortDirection,
}

impl GallerySort {
    pub fn new(criteria: SortCriteria, direction: SortDirection) -> Self {
        Self {
            criteria,
            direction,
        }
    }

    fn compare(&self, a: &StoreChart, b: &StoreChart) -> Ordering {
        let ordering = match self.criteria {
            SortCriteria::Name => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
            SortCriteria::Actual => a.actual.total_cmp(&b.actual),
            SortCriteria::Percent => a.percent.total_cmp(&b.percent),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for GallerySort {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidSort(s.to_string());
        let (criteria, direction) = s.trim().split_once('-').ok_or_else(invalid)?;

        let criteria = match criteria.to_ascii_lowercase().as_str() {
            "name" => SortCriteria::Name,
            "sum" | "actual" => SortCriteria::Actual,
            "avg" | "percent" => SortCriteria::Percent,
            _ => return Err(invalid()),
        };
        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(invalid()),
        };
        Ok(Self::new(criteria, direction))
    }
}

impl fmt::Display for GallerySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let criteria = match self.criteria {
            SortCriteria::Name => "name",
            SortCriteria::Actual => "sum",
            SortCriteria::Percent => "avg",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{criteria}-{direction}")
    }
}

/// The store charts of a sheet
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    charts: Vec<StoreChart>,
}

impl Gallery {
    pub fn new(charts: Vec<StoreChart>) -> Self {
        Self { charts }
    }

    /// All charts in insertion order
    pub fn charts(&self) -> &[StoreChart] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Charts whose label contains `query`, ignoring case. An empty query
    /// keeps everything.
    pub fn filter(&self, query: &str) -> Vec<&StoreChart> {
        let query = query.trim().to_lowercase();
        self.charts
            .iter()
            .filter(|c| query.is_empty() || c.label.to_lowercase().contains(&query))
            .collect()
    }

    /// Filtered charts in the requested order; ties keep insertion order
    pub fn view(&self, query: &str, sort: GallerySort) -> Vec<&StoreChart> {
        let mut charts = self.filter(query);
        charts.sort_by(|a, b| sort.compare(a, b));
        charts
    }
}
