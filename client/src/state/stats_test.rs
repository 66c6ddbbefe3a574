use super::*;

use contract::types::ApplicationTotals;

#[test]
fn dashboard_cards_default_to_zero() {
    let cards = dashboard_cards(None);
    assert_eq!(cards[0].value, "0");
    assert_eq!(cards[2].description, "0% vs last month");
    assert_eq!(cards[2].trend, Some(Trend::Up));
    assert_eq!(cards[1].trend, None);
}

#[test]
fn negative_growth_trends_down() {
    let stats = DashboardStats { this_month: 8, last_month: 10, growth: "-20.0".to_owned(), ..Default::default() };
    let cards = dashboard_cards(Some(&stats));
    assert_eq!(cards[2].value, "8");
    assert_eq!(cards[2].description, "-20.0% vs last month");
    assert_eq!(cards[2].trend, Some(Trend::Down));
}

#[test]
fn analytics_cards_group_thousands() {
    let mut overview = AnalyticsOverview::default();
    overview.applications.total = 12_345;
    overview.applications.this_month = 40;
    overview.visitors.today = 7;
    let cards = analytics_cards(Some(&overview));
    assert_eq!(cards[0].value, "12,345");
    assert_eq!(cards[0].description, "+40 this month");
    assert_eq!(cards[2].title, "Visitors (30d)");
    assert_eq!(cards[2].description, "7 today");
}

#[test]
fn snapshot_shares_are_relative_to_total() {
    let overview = AnalyticsOverview {
        applications: ApplicationTotals { total: 8, approved: 1, pending: 3, today: 0, this_month: 9 },
        ..Default::default()
    };
    let rows = snapshot_rows(&overview);
    assert_eq!(rows[0].label, "Approved");
    assert_eq!(rows[0].share.as_deref(), Some("12.5%"));
    assert_eq!(rows[0].bar_percent, 13);
    assert_eq!(rows[3].bar_percent, 100);
}

#[test]
fn snapshot_without_applications_has_no_share() {
    let rows = snapshot_rows(&AnalyticsOverview::default());
    assert!(rows.iter().all(|row| row.share.is_none() && row.bar_percent == 0));
}
