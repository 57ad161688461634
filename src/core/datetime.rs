//! Calendar window helpers for session aggregation.
//!
//! Both reporting windows are anchored to a caller-supplied reference
//! instant rather than the ambient clock, which keeps the aggregation
//! logic deterministic under test.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Midnight at the start of the reference instant's calendar day.
#[must_use]
pub fn today_start(reference: NaiveDateTime) -> NaiveDateTime {
    reference.date().and_time(NaiveTime::MIN)
}

/// Midnight of the Monday of the reference instant's week.
///
/// Weeks are Monday-aligned and include the current day, so on a Monday
/// this equals [`today_start`].
#[must_use]
pub fn week_start(reference: NaiveDateTime) -> NaiveDateTime {
    let days_into_week = i64::from(reference.weekday().num_days_from_monday());
    today_start(reference) - Duration::days(days_into_week)
}
