//! Headline stat cards for the dashboard and analytics screens.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use contract::format::{format_percent, group_thousands};
use contract::types::{AnalyticsOverview, DashboardStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "trend trend--up",
            Self::Down => "trend trend--down",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub description: String,
    pub helper: Option<&'static str>,
    pub trend: Option<Trend>,
    /// Accent modifier, e.g. `stat-card--blue`.
    pub tone: &'static str,
}

/// Dashboard cards. Missing stats render as zeros.
#[must_use]
pub fn dashboard_cards(stats: Option<&DashboardStats>) -> [StatCard; 4] {
    let stats = stats.cloned().unwrap_or_default();
    let growth = if stats.growth.trim().is_empty() { "0" } else { stats.growth.trim() };
    let trend = if stats.is_trending_up() { Trend::Up } else { Trend::Down };
    [
        StatCard {
            title: "Total Applications",
            value: stats.total.to_string(),
            description: "All time".to_owned(),
            helper: None,
            trend: None,
            tone: "stat-card--blue",
        },
        StatCard {
            title: "Pending Review",
            value: stats.pending.to_string(),
            description: "Needs attention".to_owned(),
            helper: None,
            trend: None,
            tone: "stat-card--yellow",
        },
        StatCard {
            title: "This Month",
            value: stats.this_month.to_string(),
            description: format!("{growth}% vs last month"),
            helper: None,
            trend: Some(trend),
            tone: "stat-card--green",
        },
        StatCard {
            title: "Today",
            value: stats.today.to_string(),
            description: "New applications".to_owned(),
            helper: None,
            trend: None,
            tone: "stat-card--purple",
        },
    ]
}

#[must_use]
pub fn analytics_cards(overview: Option<&AnalyticsOverview>) -> [StatCard; 4] {
    let o = overview.copied().unwrap_or_default();
    [
        StatCard {
            title: "Total Applications",
            value: group_thousands(o.applications.total),
            description: format!("+{} this month", o.applications.this_month),
            helper: Some("Lifetime total"),
            trend: Some(Trend::Up),
            tone: "stat-card--blue",
        },
        StatCard {
            title: "Pending Applications",
            value: group_thousands(o.applications.pending),
            description: format!("{} new today", o.applications.today),
            helper: Some("Awaiting review"),
            trend: Some(Trend::Up),
            tone: "stat-card--green",
        },
        StatCard {
            title: "Visitors (30d)",
            value: group_thousands(o.visitors.this_month),
            description: format!("{} today", o.visitors.today),
            helper: Some("Unique visitors"),
            trend: Some(Trend::Up),
            tone: "stat-card--purple",
        },
        StatCard {
            title: "Page Views (30d)",
            value: group_thousands(o.page_views.this_month),
            description: format!("{} today", o.page_views.today),
            helper: Some("All pages combined"),
            trend: Some(Trend::Up),
            tone: "stat-card--orange",
        },
    ]
}

/// One tile of the application status breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotRow {
    pub label: &'static str,
    pub count: u64,
    /// Bar width, rounded and capped at 100.
    pub bar_percent: u32,
    /// `"12.5%"`, absent when there are no applications yet.
    pub share: Option<String>,
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn snapshot_rows(overview: &AnalyticsOverview) -> Vec<SnapshotRow> {
    overview
        .snapshot()
        .into_iter()
        .map(|(label, count)| {
            let share = overview.share_of_total(count);
            SnapshotRow {
                label,
                count,
                bar_percent: share.map_or(0, |pct| pct.round().min(100.0) as u32),
                share: share.map(format_percent),
            }
        })
        .collect()
}
