use super::dates::{day_difference, parse_calendar_date};
use super::domain::{Trip, TripRecency};
use chrono::{Datelike, NaiveDate};

/// Latest trip for the technician.
///
/// Unparseable dates rank below every valid date. On equal dates the trip that
/// appears first in `trips` wins.
pub fn most_recent_trip<'a>(technician_id: &str, trips: &'a [Trip]) -> Option<&'a Trip> {
    let mut best: Option<(&'a Trip, Option<NaiveDate>)> = None;

    for trip in trips.iter().filter(|trip| trip.technician_id == technician_id) {
        let parsed = parse_calendar_date(&trip.date);
        match best {
            Some((_, current)) if parsed <= current => {}
            _ => best = Some((trip, parsed)),
        }
    }

    best.map(|(trip, _)| trip)
}

/// Most recent valid trip date for the technician, if any.
pub fn last_trip_date(technician_id: &str, trips: &[Trip]) -> Option<NaiveDate> {
    most_recent_trip(technician_id, trips).and_then(|trip| parse_calendar_date(&trip.date))
}

pub fn days_since_last_trip(
    technician_id: &str,
    trips: &[Trip],
    reference: NaiveDate,
) -> TripRecency {
    TripRecency::from_days(day_difference(
        Some(reference),
        last_trip_date(technician_id, trips),
    ))
}

/// Trips whose date falls in the reference date's calendar year.
pub fn trip_count_in_year(technician_id: &str, trips: &[Trip], reference: NaiveDate) -> u32 {
    let year = reference.year();
    let count = trips
        .iter()
        .filter(|trip| trip.technician_id == technician_id)
        .filter_map(|trip| parse_calendar_date(&trip.date))
        .filter(|date| date.year() == year)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
