use time::macros::datetime;

use super::*;

#[test]
fn humanize_splits_on_separators() {
    assert_eq!(humanize("debt-consolidation"), "Debt Consolidation");
    assert_eq!(humanize("self_employed  worker"), "Self Employed Worker");
    assert_eq!(humanize(""), "");
    assert_eq!(humanize_or_dash(None), "-");
    assert_eq!(humanize_or_dash(Some("--")), "-");
}

#[test]
fn currency_uses_ringgit_grouping() {
    assert_eq!(format_currency(Some(12_500.0)), "RM 12,500");
    assert_eq!(format_currency(Some(1_234_567.5)), "RM 1,234,567.5");
    assert_eq!(format_currency(Some(f64::NAN)), "-");
    assert_eq!(format_currency(None), "-");
}

#[test]
fn numbers_keep_up_to_three_decimals() {
    assert_eq!(format_number(4.88), "4.88");
    assert_eq!(format_number(0.12345), "0.123");
    assert_eq!(format_number(-1500.0), "-1,500");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
}

#[test]
fn loan_labels_fall_back() {
    assert_eq!(loan_purpose_label(Some("medical")), "Medical Expenses");
    assert_eq!(loan_purpose_label(Some("wedding-costs")), "Wedding Costs");
    assert_eq!(loan_purpose_label(None), "-");
    assert_eq!(loan_range_label(Some("100000+")), "RM 100,000+");
    assert_eq!(loan_range_label(Some("1-2")), "1-2");
}

#[test]
fn address_lines_skip_blanks() {
    let address = ApplicationAddress {
        line1: Some("12 Jalan Mawar".into()),
        line2: Some("  ".into()),
        city: Some("Shah Alam".into()),
        state: Some("Selangor".into()),
        postcode: Some("40000".into()),
    };
    assert_eq!(address_lines(&address), ["12 Jalan Mawar", "40000 Shah Alam", "Selangor"]);
    assert!(address_lines(&ApplicationAddress::default()).is_empty());
}

#[test]
fn long_date_uses_ordinals() {
    assert_eq!(long_date(Some("2026-01-05T08:30:00.000Z")), "January 5th, 2026");
    assert_eq!(long_date(Some("2026-03-22")), "March 22nd, 2026");
    assert_eq!(long_date(Some("2026-03-11")), "March 11th, 2026");
    assert_eq!(long_date(None), "-");
    assert_eq!(long_date(Some("not a date")), "not a date");
}

#[test]
fn long_date_time_uses_twelve_hour_clock() {
    assert_eq!(long_date_time(Some("2026-01-05T00:05:00Z")), "January 5th, 2026 12:05 AM");
    assert_eq!(long_date_time(Some("2026-01-05T13:30:00+08:00")), "January 5th, 2026 1:30 PM");
}

#[test]
fn short_and_chart_dates() {
    assert_eq!(short_date(Some("2026-01-05T08:30:00Z")), "Jan 5, 2026");
    assert_eq!(chart_date("2026-09-14"), "Sep 14");
}

#[test]
fn relative_time_follows_distance_buckets() {
    let now = datetime!(2026-01-10 12:00 UTC);
    assert_eq!(relative_time("2026-01-10T11:59:50Z", now), "less than a minute ago");
    assert_eq!(relative_time("2026-01-10T11:59:00Z", now), "1 minute ago");
    assert_eq!(relative_time("2026-01-10T11:55:00Z", now), "5 minutes ago");
    assert_eq!(relative_time("2026-01-10T11:00:00Z", now), "about 1 hour ago");
    assert_eq!(relative_time("2026-01-10T10:00:00Z", now), "about 2 hours ago");
    assert_eq!(relative_time("2026-01-09T12:00:00Z", now), "1 day ago");
    assert_eq!(relative_time("2026-01-07T12:00:00Z", now), "3 days ago");
    assert_eq!(relative_time("2026-01-12T12:00:00Z", now), "in 2 days");
    assert_eq!(relative_time("2025-01-01T12:00:00Z", now), "about 1 year ago");
    assert_eq!(relative_time("garbage", now), "garbage");
}
