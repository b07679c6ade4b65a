use chrono::{Datelike, Duration, NaiveDate};

/// Parse a canonical `YYYY-MM-DD` date string.
///
/// `None` is the invalid-date sentinel: callers at the load boundary skip
/// such records so invalid dates never enter the item set.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Format a date canonically as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short display label for axis markers, e.g. "Mar 10".
pub fn format_short(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Display label with year for long ranges, e.g. "Mar 10, 2024".
pub fn format_with_year(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), date.day(), date.year())
}

/// Inclusive day count between two dates: a span covering a single
/// calendar day counts as 1, not 0. This off-by-one is deliberate and
/// load-bearing for all geometry math.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs() + 1
}

/// Shift a date by `n` calendar days (negative shifts backwards),
/// tolerant of month and year rollover.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}
