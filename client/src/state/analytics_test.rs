use super::*;

fn visitor(date: &str, visitors: u64, page_views: u64) -> VisitorStat {
    VisitorStat { date: date.to_owned(), visitors, page_views }
}

#[test]
fn visitor_chart_labels_dates_and_scales_left_axis() {
    let chart = visitor_chart(&[visitor("2026-03-01", 4, 9), visitor("2026-03-02", 6, 17)]);
    assert_eq!(chart.labels, vec!["Mar 1", "Mar 2"]);
    assert_eq!(chart.series[1].values, vec![9.0, 17.0]);
    assert_eq!(chart.left_max, 20.0);
    assert_eq!(chart.right_max, None);
    assert_eq!(chart.max_for(Axis::Right), 20.0);
}

#[test]
fn conversion_rate_uses_its_own_axis() {
    let stats: Vec<ConversionStat> = serde_json::from_str(
        r#"[{"date":"2026-03-01","applications":30,"approved":12,"conversionRate":"40.0"}]"#,
    )
    .unwrap();
    let chart = conversion_chart(&stats);
    let rate = &chart.series[2];
    assert_eq!(rate.axis, Axis::Right);
    assert!(rate.dashed);
    assert_eq!(rate.values, vec![40.0]);
    assert_eq!(chart.left_max, 50.0);
    assert_eq!(chart.right_max, Some(50.0));
}

#[test]
fn empty_series_still_has_a_scale() {
    let chart = visitor_chart(&[]);
    assert!(chart.is_empty());
    assert_eq!(chart.left_max, 1.0);
}
