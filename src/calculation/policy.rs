//! Aggregation policy.
//!
//! The attendance figures have been computed in slightly different ways over
//! time. Each divergence is a named switch here instead of a hidden choice.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::leave_credit::LeaveDurations;

/// Switches and constants that shape an aggregation pass.
///
/// The default reports a signed balance, ignores late/early penalty minutes,
/// starts the nominal break at 04:00 UTC and uses the standard 210/270 minute
/// leave halves.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::OvertimePolicy;
///
/// let policy: OvertimePolicy = serde_json::from_str(r#"{ "floor_at_zero": true }"#).unwrap();
/// assert!(policy.floor_at_zero);
/// assert!(!policy.deduct_late_penalties);
/// assert_eq!(policy.leave.am_minutes, 210);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Clamp a negative balance to zero.
    #[serde(default)]
    pub floor_at_zero: bool,
    /// Subtract late check-in and early check-out penalty minutes from
    /// completed days.
    #[serde(default)]
    pub deduct_late_penalties: bool,
    /// Start of the nominal break window, UTC. Used to credit back the break
    /// for a morning-leave day that is still in progress.
    #[serde(default = "default_break_start")]
    pub break_start: NaiveTime,
    /// Credit per half day of leave.
    #[serde(flatten)]
    pub leave: LeaveDurations,
}

/// Nominal break start (04:00 UTC).
pub fn default_break_start() -> NaiveTime {
    NaiveTime::from_hms_opt(4, 0, 0).unwrap_or_default()
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            floor_at_zero: false,
            deduct_late_penalties: false,
            break_start: default_break_start(),
            leave: LeaveDurations::default(),
        }
    }
}

impl OvertimePolicy {
    /// Applies the floor policy to a raw balance.
    pub fn settle(&self, overtime_minutes: i64) -> i64 {
        if self.floor_at_zero {
            overtime_minutes.max(0)
        } else {
            overtime_minutes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = OvertimePolicy::default();
        assert!(!policy.floor_at_zero);
        assert!(!policy.deduct_late_penalties);
        assert_eq!(policy.break_start, NaiveTime::from_hms_opt(4, 0, 0).unwrap());
        assert_eq!(policy.leave, LeaveDurations::default());
    }

    #[test]
    fn test_settle_keeps_sign_by_default() {
        assert_eq!(OvertimePolicy::default().settle(-60), -60);
        assert_eq!(OvertimePolicy::default().settle(60), 60);
    }

    #[test]
    fn test_settle_floors_when_enabled() {
        let policy = OvertimePolicy {
            floor_at_zero: true,
            ..OvertimePolicy::default()
        };
        assert_eq!(policy.settle(-60), 0);
        assert_eq!(policy.settle(0), 0);
        assert_eq!(policy.settle(45), 45);
    }

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let policy: OvertimePolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, OvertimePolicy::default());
    }

    #[test]
    fn test_deserialize_overrides() {
        let json = r#"{
            "deduct_late_penalties": true,
            "break_start": "03:30:00",
            "am_minutes": 240
        }"#;
        let policy: OvertimePolicy = serde_json::from_str(json).unwrap();
        assert!(policy.deduct_late_penalties);
        assert_eq!(policy.break_start, NaiveTime::from_hms_opt(3, 30, 0).unwrap());
        assert_eq!(policy.leave.am_minutes, 240);
        assert_eq!(policy.leave.pm_minutes, 270);
    }
}
