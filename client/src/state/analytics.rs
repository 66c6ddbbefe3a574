//! Chart series for the analytics screen.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use contract::format::chart_date;
use contract::types::{ConversionStat, VisitorStat};

use crate::util::chart::nice_max;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
    pub axis: Axis,
    pub dashed: bool,
}

impl Series {
    fn new(label: &'static str, color: &'static str, values: Vec<f64>) -> Self {
        Self { label, color, values, axis: Axis::Left, dashed: false }
    }
}

/// Everything an SVG line chart needs: x labels, series and axis maxima.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub left_max: f64,
    /// Present when some series plots against the right axis.
    pub right_max: Option<f64>,
}

impl ChartData {
    fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        let axis_max = |axis: Axis| {
            series
                .iter()
                .filter(|s| s.axis == axis)
                .flat_map(|s| s.values.iter().copied())
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        };
        let left_max = nice_max(axis_max(Axis::Left).unwrap_or(0.0));
        let right_max = axis_max(Axis::Right).map(nice_max);
        Self { labels, series, left_max, right_max }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn max_for(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Left => self.left_max,
            Axis::Right => self.right_max.unwrap_or(self.left_max),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: u64) -> f64 {
    value as f64
}

#[must_use]
pub fn visitor_chart(stats: &[VisitorStat]) -> ChartData {
    ChartData::new(
        stats.iter().map(|s| chart_date(&s.date)).collect(),
        vec![
            Series::new("Visitors", "#3b82f6", stats.iter().map(|s| as_f64(s.visitors)).collect()),
            Series::new("Page Views", "#10b981", stats.iter().map(|s| as_f64(s.page_views)).collect()),
        ],
    )
}

/// Counts on the left axis, conversion rate dashed on the right.
#[must_use]
pub fn conversion_chart(stats: &[ConversionStat]) -> ChartData {
    ChartData::new(
        stats.iter().map(|s| chart_date(&s.date)).collect(),
        vec![
            Series::new("Applications", "#6366f1", stats.iter().map(|s| as_f64(s.applications)).collect()),
            Series::new("Approved", "#22c55e", stats.iter().map(|s| as_f64(s.approved)).collect()),
            Series {
                axis: Axis::Right,
                dashed: true,
                ..Series::new(
                    "Conversion Rate (%)",
                    "#f97316",
                    stats.iter().map(|s| s.conversion_rate).collect(),
                )
            },
        ],
    )
}
