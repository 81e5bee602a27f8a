//! Record classification.
//!
//! Decides which rule an attendance record falls under relative to the
//! calendar day of "now". Rules are checked in order and the first match
//! wins.

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, RecordClass};

/// Classifies a record against `today`.
///
/// 1. no working day → [`RecordClass::NotScheduled`]
/// 2. dated after today → [`RecordClass::Future`]
/// 3. checked in and out → [`RecordClass::Completed`]
/// 4. today, checked in with a known time, not checked out → [`RecordClass::InProgress`]
/// 5. no punches and a full-day leave → [`RecordClass::LeaveDay`]
/// 6. anything else → [`RecordClass::Unreconciled`]
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::classify_record;
/// use overtime_engine::models::{AttendanceRecord, RecordClass};
/// use chrono::NaiveDate;
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "date": "2026-01-16",
///     "workingDay": { "workingMinutes": 480, "breaks": [] }
/// }"#).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(classify_record(&record, today), RecordClass::Future);
/// ```
pub fn classify_record(record: &AttendanceRecord, today: NaiveDate) -> RecordClass {
    if !record.is_scheduled() {
        return RecordClass::NotScheduled;
    }

    if record.date > today {
        return RecordClass::Future;
    }

    match (record.is_checked_in(), record.is_checked_out()) {
        (true, true) => RecordClass::Completed,
        (true, false) if record.date == today && record.check_in_time().is_some() => {
            RecordClass::InProgress
        }
        (false, false) if record.has_full_day_leave() => RecordClass::LeaveDay,
        _ => RecordClass::Unreconciled,
    }
}

/// Explains why a record ended up [`RecordClass::Unreconciled`].
pub fn unreconciled_reason(record: &AttendanceRecord, today: NaiveDate) -> &'static str {
    match (record.is_checked_in(), record.is_checked_out()) {
        (true, false) if record.date < today => "checked in on a past day but never checked out",
        (true, false) => "checked in but the check-in time is unknown",
        (false, true) => "checked out without a check-in",
        _ if record.date == today => "no punches yet today",
        _ => "no punches and no full-day leave on a past working day",
    }
}
