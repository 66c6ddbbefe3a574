//! Display formatting shared by the console and the CLI.
//!
//! Timestamps are RFC 3339 strings from the API and are rendered in the
//! offset they carry. Unparseable input is echoed back unchanged.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::types::ApplicationAddress;

/// Placeholder for absent values.
pub const EMPTY: &str = "-";

const LOAN_PURPOSE_LABELS: [(&str, &str); 7] = [
    ("home-renovation", "Home Renovation"),
    ("debt-consolidation", "Debt Consolidation"),
    ("business-expansion", "Business Expansion"),
    ("education", "Education"),
    ("medical", "Medical Expenses"),
    ("vehicle", "Vehicle Purchase"),
    ("other", "Other"),
];

const LOAN_RANGE_LABELS: [(&str, &str); 5] = [
    ("5000-10000", "RM 5,000 - RM 10,000"),
    ("10000-30000", "RM 10,000 - RM 30,000"),
    ("30000-50000", "RM 30,000 - RM 50,000"),
    ("50000-100000", "RM 50,000 - RM 100,000"),
    ("100000+", "RM 100,000+"),
];

// =============================================================================
// TEXT
// =============================================================================

/// `"debt-consolidation"` → `"Debt Consolidation"`.
#[must_use]
pub fn humanize(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`humanize`], or `"-"` for absent and blank values.
#[must_use]
pub fn humanize_or_dash(value: Option<&str>) -> String {
    match value.map(humanize) {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY.to_owned(),
    }
}

/// Uppercase the first character only: `"pending"` → `"Pending"`.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map(|first| first.to_uppercase().chain(chars).collect()).unwrap_or_default()
}

/// Value or `"-"` when absent or empty.
#[must_use]
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|text| !text.trim().is_empty()).unwrap_or(EMPTY)
}

#[must_use]
pub fn loan_purpose_label(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return EMPTY.to_owned();
    };
    LOAN_PURPOSE_LABELS
        .iter()
        .find(|(key, _)| *key == value)
        .map_or_else(|| humanize(value), |(_, label)| (*label).to_owned())
}

#[must_use]
pub fn loan_range_label(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return EMPTY.to_owned();
    };
    LOAN_RANGE_LABELS
        .iter()
        .find(|(key, _)| *key == value)
        .map_or_else(|| value.to_owned(), |(_, label)| (*label).to_owned())
}

/// `[line1, line2, "postcode city", state]` without blank entries.
#[must_use]
pub fn address_lines(address: &ApplicationAddress) -> Vec<String> {
    let city_line = [address.postcode.as_deref(), address.city.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    [address.line1.clone(), address.line2.clone(), Some(city_line), address.state.clone()]
        .into_iter()
        .flatten()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

// =============================================================================
// NUMBERS
// =============================================================================

/// `1234567` → `"1,234,567"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped number with up to three fraction digits, trailing zeros dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY.to_owned();
    }
    let negative = value < 0.0;
    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = group_thousands(scaled / 1000);
    let fraction = scaled % 1000;
    let mut out = String::new();
    if negative && scaled > 0 {
        out.push('-');
    }
    out.push_str(&whole);
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// `Some(12500.0)` → `"RM 12,500"`; absent or NaN → `"-"`.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(amount) if amount.is_finite() => format!("RM {}", format_number(amount)),
        _ => EMPTY.to_owned(),
    }
}

/// `12.345` → `"12.3%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

// =============================================================================
// DATES
// =============================================================================

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (as UTC midnight).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let date_only = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &date_only)
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
}

fn ordinal(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

fn short_month(at: OffsetDateTime) -> String {
    at.month().to_string().chars().take(3).collect()
}

fn clock(at: OffsetDateTime) -> String {
    let hour = at.hour();
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{:02} {meridiem}", at.minute())
}

fn with_parsed(raw: Option<&str>, render: impl Fn(OffsetDateTime) -> String) -> String {
    match raw.filter(|value| !value.trim().is_empty()) {
        None => EMPTY.to_owned(),
        Some(value) => parse_timestamp(value).map_or_else(|| value.to_owned(), render),
    }
}

/// `"January 5th, 2026"`.
#[must_use]
pub fn long_date(raw: Option<&str>) -> String {
    with_parsed(raw, |at| format!("{} {}, {}", at.month(), ordinal(at.day()), at.year()))
}

/// `"January 5th, 2026 8:30 AM"`.
#[must_use]
pub fn long_date_time(raw: Option<&str>) -> String {
    with_parsed(raw, |at| format!("{} {}, {} {}", at.month(), ordinal(at.day()), at.year(), clock(at)))
}

/// `"Jan 5, 2026"`.
#[must_use]
pub fn short_date(raw: Option<&str>) -> String {
    with_parsed(raw, |at| format!("{} {}, {}", short_month(at), at.day(), at.year()))
}

/// `"Jan 5"`, for chart axes.
#[must_use]
pub fn chart_date(raw: &str) -> String {
    with_parsed(Some(raw), |at| format!("{} {}", short_month(at), at.day()))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

/// Distance in words between `then` and `now`, without a suffix.
fn distance_in_words(minutes: i64) -> String {
    const DAY: i64 = 1440;
    const MONTH: i64 = 43_200;
    const YEAR: i64 = 525_600;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let round_div = |value: i64, unit: i64| (value as f64 / unit as f64).round() as i64;

    match minutes {
        0 => "less than a minute".to_owned(),
        m if m < 45 => plural(m, "minute"),
        m if m < 90 => "about 1 hour".to_owned(),
        m if m < DAY => format!("about {}", plural(round_div(m, 60), "hour")),
        m if m < 2520 => "1 day".to_owned(),
        m if m < MONTH => plural(round_div(m, DAY), "day"),
        m if m < 2 * MONTH => format!("about {}", plural(round_div(m, MONTH), "month")),
        m if m < YEAR => plural(round_div(m, MONTH), "month"),
        m => {
            let months = m / MONTH;
            let years = months / 12;
            match months % 12 {
                r if r < 3 => format!("about {}", plural(years, "year")),
                r if r < 9 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}

/// `"5 minutes ago"`, `"about 2 hours ago"`, `"in 2 days"`.
#[must_use]
pub fn relative_time(raw: &str, now: OffsetDateTime) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let seconds = (now - then).whole_seconds();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let minutes = (seconds.abs() as f64 / 60.0).round() as i64;
    let words = distance_in_words(minutes);
    if seconds >= 0 { format!("{words} ago") } else { format!("in {words}") }
}
