//! Live estimate for a day that has not been checked out yet.
//!
//! Until the user checks out the service reports no actual minutes for the
//! day, so "now" stands in for the check-out: the estimate is the time since
//! check-in minus the scheduled breaks.
//!
//! A morning-leave day starts after the nominal break window has already
//! opened. Subtracting the whole break would penalise the user twice, so the
//! gap between check-in and the break start is credited back.

use chrono::{DateTime, NaiveTime, Utc};

use crate::models::AttendanceRecord;

use super::minutes::{at_time_today, break_minutes, minutes_between};

/// The parts of the in-progress estimate, kept apart for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgressEstimate {
    /// Minutes from check-in to now.
    pub elapsed_minutes: i64,
    /// Total scheduled break minutes.
    pub break_minutes: i64,
    /// Break credit for a morning-leave day.
    pub am_adjustment_minutes: i64,
}

impl InProgressEstimate {
    /// `elapsed - breaks + am adjustment`, which may be negative.
    pub fn provisional_minutes(&self) -> i64 {
        self.elapsed_minutes - self.break_minutes + self.am_adjustment_minutes
    }

    /// The provisional value floored at zero, as added to the actual total.
    pub fn counted_minutes(&self) -> i64 {
        self.provisional_minutes().max(0)
    }
}

/// Estimates the actual minutes worked so far on an in-progress day.
///
/// Returns `None` when the record has no known check-in time.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::estimate_in_progress;
/// use overtime_engine::models::AttendanceRecord;
/// use chrono::{DateTime, NaiveTime, Utc};
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "date": "2026-01-15",
///     "checkInStamp": { "roundedDatetime": "2026-01-15T02:00:00Z" },
///     "workingDay": {
///         "workingMinutes": 480,
///         "breaks": [{ "startTime": "2026-01-15T04:00:00Z", "endTime": "2026-01-15T05:00:00Z" }]
///     }
/// }"#).unwrap();
///
/// let now = DateTime::parse_from_rfc3339("2026-01-15T11:00:00Z").unwrap().with_timezone(&Utc);
/// let break_start = NaiveTime::from_hms_opt(4, 0, 0).unwrap();
///
/// let estimate = estimate_in_progress(&record, now, break_start).unwrap();
/// assert_eq!(estimate.elapsed_minutes, 540);
/// assert_eq!(estimate.break_minutes, 60);
/// assert_eq!(estimate.provisional_minutes(), 480);
/// ```
pub fn estimate_in_progress(
    record: &AttendanceRecord,
    now: DateTime<Utc>,
    break_start: NaiveTime,
) -> Option<InProgressEstimate> {
    let check_in = record.check_in_time()?;

    let scheduled_breaks = record
        .working_day
        .as_ref()
        .map(|day| break_minutes(&day.breaks))
        .unwrap_or(0);

    let am_adjustment_minutes = if record.has_am_half_day_leave() {
        minutes_between(check_in, at_time_today(now, break_start))
    } else {
        0
    };

    Some(InProgressEstimate {
        elapsed_minutes: minutes_between(now, check_in),
        break_minutes: scheduled_breaks,
        am_adjustment_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveUnitType, RecordFlow, ScheduledBreak, Stamp, WorkingDay};
    use chrono::NaiveDate;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn four_am() -> NaiveTime {
        NaiveTime::from_hms_opt(4, 0, 0).unwrap()
    }

    fn in_progress(check_in: &str, flows: Vec<RecordFlow>) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            check_in_stamp: Some(Stamp::at(utc(check_in))),
            check_out_stamp: None,
            actual_working_minutes: 0,
            check_in_late_minutes: 0,
            check_out_early_minutes: 0,
            flows,
            working_day: Some(WorkingDay {
                working_minutes: 480,
                breaks: vec![ScheduledBreak {
                    start_time: utc("2026-01-15T04:00:00Z"),
                    end_time: utc("2026-01-15T05:00:00Z"),
                }],
            }),
        }
    }

    #[test]
    fn test_full_day_worked_so_far() {
        let record = in_progress("2026-01-15T02:00:00Z", vec![]);
        let estimate = estimate_in_progress(&record, utc("2026-01-15T12:00:00Z"), four_am()).unwrap();
        assert_eq!(estimate.elapsed_minutes, 600);
        assert_eq!(estimate.am_adjustment_minutes, 0);
        assert_eq!(estimate.provisional_minutes(), 540);
        assert_eq!(estimate.counted_minutes(), 540);
    }

    #[test]
    fn test_before_break_is_floored_when_counted() {
        let record = in_progress("2026-01-15T02:00:00Z", vec![]);
        let estimate = estimate_in_progress(&record, utc("2026-01-15T02:30:00Z"), four_am()).unwrap();
        assert_eq!(estimate.provisional_minutes(), -30);
        assert_eq!(estimate.counted_minutes(), 0);
    }

    #[test]
    fn test_am_leave_credits_gap_to_break_start() {
        let record = in_progress(
            "2026-01-15T05:00:00Z",
            vec![RecordFlow::half_day(LeaveUnitType::Am)],
        );
        let estimate = estimate_in_progress(&record, utc("2026-01-15T09:30:00Z"), four_am()).unwrap();
        assert_eq!(estimate.elapsed_minutes, 270);
        assert_eq!(estimate.break_minutes, 60);
        assert_eq!(estimate.am_adjustment_minutes, 60);
        assert_eq!(estimate.provisional_minutes(), 270);
    }

    #[test]
    fn test_am_leave_checked_in_before_break_start() {
        let record = in_progress(
            "2026-01-15T03:30:00Z",
            vec![RecordFlow::half_day(LeaveUnitType::Am)],
        );
        let estimate = estimate_in_progress(&record, utc("2026-01-15T09:30:00Z"), four_am()).unwrap();
        assert_eq!(estimate.am_adjustment_minutes, -30);
    }

    #[test]
    fn test_pm_leave_has_no_adjustment() {
        let record = in_progress(
            "2026-01-15T02:00:00Z",
            vec![RecordFlow::half_day(LeaveUnitType::Pm)],
        );
        let estimate = estimate_in_progress(&record, utc("2026-01-15T06:00:00Z"), four_am()).unwrap();
        assert_eq!(estimate.am_adjustment_minutes, 0);
        assert_eq!(estimate.provisional_minutes(), 180);
    }

    #[test]
    fn test_custom_break_start() {
        let record = in_progress(
            "2026-01-15T05:00:00Z",
            vec![RecordFlow::half_day(LeaveUnitType::Am)],
        );
        let break_start = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
        let estimate = estimate_in_progress(&record, utc("2026-01-15T09:00:00Z"), break_start).unwrap();
        assert_eq!(estimate.am_adjustment_minutes, 120);
    }

    #[test]
    fn test_unknown_check_in_time() {
        let mut record = in_progress("2026-01-15T02:00:00Z", vec![]);
        record.check_in_stamp = Some(Stamp::default());
        assert!(estimate_in_progress(&record, utc("2026-01-15T09:00:00Z"), four_am()).is_none());
    }
}
