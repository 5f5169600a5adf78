use chrono::{DateTime, NaiveDate, Utc};

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Returns `None` unless the text is exactly four, two and two digits separated
/// by `-`, with month and day in `1..=12` / `1..=31` and the day present in
/// that month (`2025-02-30` is rejected).
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.trim().split('-');
    let year = parse_component(parts.next()?, 4)?;
    let month = parse_component(parts.next()?, 2)?;
    let day = parse_component(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component(raw: &str, width: usize) -> Option<u32> {
    if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Whole days from `earlier` to `later`. `None` stands for an unbounded gap.
pub fn day_difference(later: Option<NaiveDate>, earlier: Option<NaiveDate>) -> Option<i64> {
    match (later, earlier) {
        (Some(later), Some(earlier)) => Some(later.signed_duration_since(earlier).num_days()),
        _ => None,
    }
}

/// Same as [`day_difference`] for instants, ignoring the time of day.
pub fn day_difference_at(
    later: Option<DateTime<Utc>>,
    earlier: Option<DateTime<Utc>>,
) -> Option<i64> {
    day_difference(later.map(utc_calendar_date), earlier.map(utc_calendar_date))
}

pub fn utc_calendar_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
