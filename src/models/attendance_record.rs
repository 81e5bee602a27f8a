//! Attendance record model and related types.
//!
//! This module defines [`AttendanceRecord`] and the pieces it is built from:
//! punch stamps, leave flows and the scheduled working day. Field names follow
//! the camelCase JSON served by the attendance service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A punch recorded by the attendance service.
///
/// The service sometimes sends an empty object for a punch whose time has not
/// been rounded yet, so the timestamp itself is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    /// The punch time rounded by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_datetime: Option<DateTime<Utc>>,
}

impl Stamp {
    /// Creates a stamp at the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            rounded_datetime: Some(instant),
        }
    }
}

/// How much of the day a leave request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveUnit {
    /// The whole scheduled day.
    FullDay,
    /// Either the morning or the afternoon.
    HalfDay,
    /// Any unit this engine does not account for.
    #[serde(other)]
    Other,
}

/// Which half of the day a half-day leave covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveUnitType {
    /// Morning.
    Am,
    /// Afternoon.
    Pm,
    /// Any half this engine does not account for.
    #[serde(other)]
    Other,
}

/// Parameters of a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveParams {
    /// Full or half day.
    pub leave_unit: LeaveUnit,
    /// Morning or afternoon, only meaningful for half-day leave.
    #[serde(default)]
    pub leave_unit_type: Option<LeaveUnitType>,
}

/// An approved request attached to a record (only leave is modelled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFlow {
    /// The request parameters.
    pub params: LeaveParams,
}

impl RecordFlow {
    /// A full-day leave.
    pub fn full_day() -> Self {
        Self {
            params: LeaveParams {
                leave_unit: LeaveUnit::FullDay,
                leave_unit_type: None,
            },
        }
    }

    /// A half-day leave covering the given half.
    pub fn half_day(half: LeaveUnitType) -> Self {
        Self {
            params: LeaveParams {
                leave_unit: LeaveUnit::HalfDay,
                leave_unit_type: Some(half),
            },
        }
    }

    /// Returns true for a half-day leave covering the morning.
    pub fn is_am_half_day(&self) -> bool {
        self.params.leave_unit == LeaveUnit::HalfDay
            && self.params.leave_unit_type == Some(LeaveUnitType::Am)
    }

    /// Returns true for a full-day leave.
    pub fn is_full_day(&self) -> bool {
        self.params.leave_unit == LeaveUnit::FullDay
    }
}

/// A break in the working-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledBreak {
    /// When the break starts.
    pub start_time: DateTime<Utc>,
    /// When the break ends.
    pub end_time: DateTime<Utc>,
}

/// The schedule for a day the user is expected to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDay {
    /// Minutes of work required on this day.
    pub working_minutes: i64,
    /// Scheduled breaks.
    #[serde(default)]
    pub breaks: Vec<ScheduledBreak>,
}

/// One calendar day of attendance.
///
/// # Example
///
/// ```
/// use overtime_engine::models::AttendanceRecord;
///
/// let json = r#"{
///     "date": "2026-01-15",
///     "checkInStamp": { "roundedDatetime": "2026-01-15T00:00:00Z" },
///     "checkOutStamp": { "roundedDatetime": "2026-01-15T09:00:00Z" },
///     "actualWorkingMinutes": 480,
///     "flows": [],
///     "workingDay": { "workingMinutes": 480, "breaks": [] }
/// }"#;
///
/// let record: AttendanceRecord = serde_json::from_str(json).unwrap();
/// assert!(record.is_scheduled());
/// assert!(record.is_checked_out());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The calendar day this record describes.
    pub date: NaiveDate,
    /// Check-in punch, absent until the user checks in.
    #[serde(default)]
    pub check_in_stamp: Option<Stamp>,
    /// Check-out punch, absent until the user checks out.
    #[serde(default)]
    pub check_out_stamp: Option<Stamp>,
    /// Minutes worked as reported by the service.
    #[serde(default)]
    pub actual_working_minutes: i64,
    /// Penalty minutes for arriving late.
    #[serde(default)]
    pub check_in_late_minutes: i64,
    /// Penalty minutes for leaving early.
    #[serde(default)]
    pub check_out_early_minutes: i64,
    /// Leave requests for the day.
    #[serde(default)]
    pub flows: Vec<RecordFlow>,
    /// Present only on scheduled working days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_day: Option<WorkingDay>,
}

impl AttendanceRecord {
    /// Returns true if the user is scheduled to work on this day.
    pub fn is_scheduled(&self) -> bool {
        self.working_day.is_some()
    }

    /// Returns true if the user has checked in.
    pub fn is_checked_in(&self) -> bool {
        self.check_in_stamp.is_some()
    }

    /// Returns true if the user has checked out.
    pub fn is_checked_out(&self) -> bool {
        self.check_out_stamp.is_some()
    }

    /// The rounded check-in time, when one is known.
    pub fn check_in_time(&self) -> Option<DateTime<Utc>> {
        self.check_in_stamp
            .as_ref()
            .and_then(|stamp| stamp.rounded_datetime)
    }

    /// Returns true if any flow is a half-day morning leave.
    pub fn has_am_half_day_leave(&self) -> bool {
        self.flows.iter().any(RecordFlow::is_am_half_day)
    }

    /// Returns true if any flow is a full-day leave.
    pub fn has_full_day_leave(&self) -> bool {
        self.flows.iter().any(RecordFlow::is_full_day)
    }
}
