//! Leave credit calculation.
//!
//! Approved leave counts as worked time so it does not show up as a deficit.
//! A morning off is worth 210 minutes and an afternoon off 270 minutes; a
//! full day is both halves.

use serde::{Deserialize, Serialize};

use crate::models::{LeaveUnit, LeaveUnitType, RecordFlow};

/// Standard length of a morning half-day leave, in minutes.
pub const AM_OFF_MINUTES: i64 = 210;

/// Standard length of an afternoon half-day leave, in minutes.
pub const PM_OFF_MINUTES: i64 = 270;

/// Minutes credited for each half of the day.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::LeaveDurations;
///
/// let durations = LeaveDurations::default();
/// assert_eq!(durations.full_day(), 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDurations {
    /// Credit for a morning off.
    #[serde(default = "default_am")]
    pub am_minutes: i64,
    /// Credit for an afternoon off.
    #[serde(default = "default_pm")]
    pub pm_minutes: i64,
}

fn default_am() -> i64 {
    AM_OFF_MINUTES
}

fn default_pm() -> i64 {
    PM_OFF_MINUTES
}

impl Default for LeaveDurations {
    fn default() -> Self {
        Self {
            am_minutes: AM_OFF_MINUTES,
            pm_minutes: PM_OFF_MINUTES,
        }
    }
}

impl LeaveDurations {
    /// Credit for a full day off.
    pub fn full_day(&self) -> i64 {
        self.am_minutes + self.pm_minutes
    }

    /// Credit for a single leave flow.
    ///
    /// Unknown units, and half-day leave without a known half, earn nothing.
    pub fn credit_for(&self, flow: &RecordFlow) -> i64 {
        match (flow.params.leave_unit, flow.params.leave_unit_type) {
            (LeaveUnit::FullDay, _) => self.full_day(),
            (LeaveUnit::HalfDay, Some(LeaveUnitType::Am)) => self.am_minutes,
            (LeaveUnit::HalfDay, Some(LeaveUnitType::Pm)) => self.pm_minutes,
            _ => 0,
        }
    }
}

/// Sums the leave credit of all flows on a record.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::{leave_credit_minutes, LeaveDurations};
/// use overtime_engine::models::{LeaveUnitType, RecordFlow};
///
/// let flows = vec![RecordFlow::half_day(LeaveUnitType::Am)];
/// assert_eq!(leave_credit_minutes(&flows, &LeaveDurations::default()), 210);
///
/// let flows = vec![RecordFlow::full_day()];
/// assert_eq!(leave_credit_minutes(&flows, &LeaveDurations::default()), 480);
/// ```
pub fn leave_credit_minutes(flows: &[RecordFlow], durations: &LeaveDurations) -> i64 {
    flows.iter().map(|flow| durations.credit_for(flow)).sum()
}
