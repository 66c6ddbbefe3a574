//! Dashboard and analytics aggregates.

use serde::{Deserialize, Serialize};

use super::de::{number_or_string, string_or_number};

/// Reporting window for the visitor and conversion series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl AnalyticsPeriod {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.as_str() == raw.trim())
    }
}

/// `GET /admin/applications/stats/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: u64,
    pub pending: u64,
    pub today: u64,
    pub this_month: u64,
    pub last_month: u64,
    /// Month-over-month growth percentage, e.g. `"12.5"`.
    #[serde(deserialize_with = "string_or_number")]
    pub growth: String,
}

impl DashboardStats {
    /// Growth as a number; unparseable values count as zero.
    #[must_use]
    pub fn growth_percent(&self) -> f64 {
        self.growth.trim().trim_end_matches('%').parse().unwrap_or(0.0)
    }

    /// True when this month is not behind last month.
    #[must_use]
    pub fn is_trending_up(&self) -> bool {
        self.growth_percent() >= 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationTotals {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub today: u64,
    pub this_month: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrafficTotals {
    pub total: u64,
    pub today: u64,
    pub this_month: u64,
}

/// `GET /admin/analytics/overview`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub applications: ApplicationTotals,
    pub visitors: TrafficTotals,
    pub page_views: TrafficTotals,
}

impl AnalyticsOverview {
    /// `(label, count)` rows for the application status breakdown.
    #[must_use]
    pub fn snapshot(&self) -> [(&'static str, u64); 4] {
        let apps = &self.applications;
        [
            ("Approved", apps.approved),
            ("Pending", apps.pending),
            ("Today", apps.today),
            ("This Month", apps.this_month),
        ]
    }

    /// Share of all applications, in percent, or `None` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share_of_total(&self, count: u64) -> Option<f64> {
        let total = self.applications.total;
        (total > 0).then(|| count as f64 / total as f64 * 100.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisitorStat {
    pub date: String,
    pub visitors: u64,
    pub page_views: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionStat {
    pub date: String,
    pub applications: u64,
    pub approved: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub conversion_rate: f64,
}
