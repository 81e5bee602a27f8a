//! Minute arithmetic between instants.
//!
//! Every duration in the engine is a whole number of minutes. Instants are
//! compared at millisecond precision and rounded half toward positive
//! infinity, so `+90s` becomes 2 minutes and `-90s` becomes -1 minute.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::ScheduledBreak;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Returns the number of whole minutes from `earlier` to `later`.
///
/// The result is negative when `later` precedes `earlier` and exactly zero
/// when the two instants coincide.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::minutes_between;
/// use chrono::{DateTime, Utc};
///
/// let utc = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
///
/// assert_eq!(minutes_between(utc("2026-01-15T11:00:00Z"), utc("2026-01-15T02:00:00Z")), 540);
/// assert_eq!(minutes_between(utc("2026-01-15T02:00:00Z"), utc("2026-01-15T02:00:00Z")), 0);
/// assert_eq!(minutes_between(utc("2026-01-15T04:00:00Z"), utc("2026-01-15T05:00:00Z")), -60);
/// ```
pub fn minutes_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    let millis = (later - earlier).num_milliseconds();
    if millis == 0 {
        return 0;
    }
    (millis + MILLIS_PER_MINUTE / 2).div_euclid(MILLIS_PER_MINUTE)
}

/// Sums the length of the scheduled breaks in minutes.
pub fn break_minutes(breaks: &[ScheduledBreak]) -> i64 {
    breaks
        .iter()
        .map(|b| minutes_between(b.end_time, b.start_time))
        .sum()
}

/// The calendar day of `now`, in UTC.
pub fn today(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// The given wall-clock time on the calendar day of `now`, in UTC.
pub fn at_time_today(now: DateTime<Utc>, time: NaiveTime) -> DateTime<Utc> {
    today(now).and_time(time).and_utc()
}
