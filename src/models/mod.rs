//! Core data models for the Overtime Engine.
//!
//! This module contains the attendance data consumed by the engine and the
//! summary it produces.

mod attendance_record;
mod overtime_summary;
mod report;

pub use attendance_record::{
    AttendanceRecord, LeaveParams, LeaveUnit, LeaveUnitType, RecordFlow, ScheduledBreak, Stamp,
    WorkingDay,
};
pub use overtime_summary::{DataWarning, OvertimeSummary, RecordClass, RecordContribution};
pub use report::{AttendanceReport, Items};
