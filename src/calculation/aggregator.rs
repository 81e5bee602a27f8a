//! Overtime aggregation.
//!
//! Folds a list of attendance records into scheduled, actual and leave-credit
//! totals and derives the overtime balance as of a given instant. Each record
//! contributes independently of the others, so the order of the input does
//! not affect the totals.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::models::{
    AttendanceRecord, DataWarning, OvertimeSummary, RecordClass, RecordContribution,
};

use super::classification::{classify_record, unreconciled_reason};
use super::in_progress::estimate_in_progress;
use super::leave_credit::leave_credit_minutes;
use super::minutes::today;
use super::policy::OvertimePolicy;

/// Warning code for records skipped as unreconciled.
pub const UNRECONCILED_RECORD: &str = "unreconciled_record";

/// Running totals of an aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    /// Scheduled minutes so far.
    pub scheduled_minutes: i64,
    /// Actual minutes so far.
    pub actual_minutes: i64,
    /// Leave credit so far.
    pub leave_credit_minutes: i64,
}

impl Accumulator {
    /// Adds one record's contribution.
    pub fn add(self, contribution: &RecordContribution) -> Self {
        Self {
            scheduled_minutes: self.scheduled_minutes + contribution.scheduled_minutes,
            actual_minutes: self.actual_minutes + contribution.actual_minutes,
            leave_credit_minutes: self.leave_credit_minutes + contribution.leave_credit_minutes,
        }
    }

    /// `actual - scheduled + leave credit`, before any floor policy.
    pub fn overtime_minutes(&self) -> i64 {
        self.actual_minutes - self.scheduled_minutes + self.leave_credit_minutes
    }
}

/// Computes the overtime balance for a set of records.
///
/// The aggregator holds nothing but its policy. Every call starts from an
/// empty [`Accumulator`], and the same `(records, now)` pair always produces
/// the same result.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{OvertimeAggregator, OvertimePolicy};
/// use overtime_engine::models::AttendanceRecord;
/// use chrono::{DateTime, Utc};
///
/// let records: Vec<AttendanceRecord> = serde_json::from_str(r#"[{
///     "date": "2026-01-14",
///     "checkInStamp": { "roundedDatetime": "2026-01-14T00:00:00Z" },
///     "checkOutStamp": { "roundedDatetime": "2026-01-14T10:00:00Z" },
///     "actualWorkingMinutes": 540,
///     "flows": [],
///     "workingDay": { "workingMinutes": 480, "breaks": [] }
/// }]"#).unwrap();
///
/// let now = DateTime::parse_from_rfc3339("2026-01-15T03:00:00Z").unwrap().with_timezone(&Utc);
/// let aggregator = OvertimeAggregator::new(OvertimePolicy::default());
///
/// assert_eq!(aggregator.aggregate(&records, now), 60);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OvertimeAggregator {
    policy: OvertimePolicy,
}

impl OvertimeAggregator {
    /// Creates an aggregator with the given policy.
    pub fn new(policy: OvertimePolicy) -> Self {
        Self { policy }
    }

    /// The policy in effect.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// Returns the overtime balance in minutes as of `now`.
    pub fn aggregate(&self, records: &[AttendanceRecord], now: DateTime<Utc>) -> i64 {
        let totals = records
            .iter()
            .map(|record| self.contribution(record, now))
            .fold(Accumulator::default(), |acc, c| acc.add(&c));

        self.policy.settle(totals.overtime_minutes())
    }

    /// Like [`aggregate`](Self::aggregate), but also reports how each record
    /// was treated and warns about unreconciled records.
    pub fn summarize(&self, records: &[AttendanceRecord], now: DateTime<Utc>) -> OvertimeSummary {
        let contributions: Vec<RecordContribution> = records
            .iter()
            .map(|record| self.contribution(record, now))
            .collect();

        let totals = contributions
            .iter()
            .fold(Accumulator::default(), |acc, c| acc.add(c));

        let warnings: Vec<DataWarning> = records
            .iter()
            .zip(&contributions)
            .filter(|(_, c)| c.class == RecordClass::Unreconciled)
            .map(|(record, _)| DataWarning {
                code: UNRECONCILED_RECORD.to_string(),
                date: record.date,
                message: unreconciled_reason(record, today(now)).to_string(),
            })
            .collect();

        let overtime_minutes = self.policy.settle(totals.overtime_minutes());

        info!(
            records = records.len(),
            scheduled_minutes = totals.scheduled_minutes,
            actual_minutes = totals.actual_minutes,
            leave_credit_minutes = totals.leave_credit_minutes,
            overtime_minutes,
            warnings = warnings.len(),
            "Aggregated attendance records"
        );

        OvertimeSummary {
            evaluated_at: now,
            scheduled_minutes: totals.scheduled_minutes,
            actual_minutes: totals.actual_minutes,
            leave_credit_minutes: totals.leave_credit_minutes,
            overtime_minutes,
            floored: self.policy.floor_at_zero,
            contributions,
            warnings,
        }
    }

    /// What a single record adds to the totals as of `now`.
    pub fn contribution(&self, record: &AttendanceRecord, now: DateTime<Utc>) -> RecordContribution {
        let class = classify_record(record, today(now));

        let Some(working_day) = record.working_day.as_ref().filter(|_| class.contributes()) else {
            debug!(date = %record.date, class = %class, "Skipping record");
            return RecordContribution::skipped(record.date, class);
        };

        let actual_minutes = match class {
            RecordClass::Completed => self.completed_actual_minutes(record),
            RecordClass::InProgress => estimate_in_progress(record, now, self.policy.break_start)
                .map(|estimate| {
                    debug!(
                        date = %record.date,
                        elapsed_minutes = estimate.elapsed_minutes,
                        break_minutes = estimate.break_minutes,
                        am_adjustment_minutes = estimate.am_adjustment_minutes,
                        "Estimated in-progress day"
                    );
                    estimate.counted_minutes()
                })
                .unwrap_or(0),
            _ => 0,
        };

        RecordContribution {
            date: record.date,
            class,
            scheduled_minutes: working_day.working_minutes,
            actual_minutes,
            leave_credit_minutes: leave_credit_minutes(&record.flows, &self.policy.leave),
        }
    }

    fn completed_actual_minutes(&self, record: &AttendanceRecord) -> i64 {
        if self.policy.deduct_late_penalties {
            record.actual_working_minutes
                - record.check_in_late_minutes
                - record.check_out_early_minutes
        } else {
            record.actual_working_minutes
        }
    }
}

/// Returns the overtime balance in minutes as of `now`, using the default
/// policy.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::aggregate;
/// use chrono::Utc;
///
/// assert_eq!(aggregate(&[], Utc::now()), 0);
/// ```
pub fn aggregate(records: &[AttendanceRecord], now: DateTime<Utc>) -> i64 {
    OvertimeAggregator::default().aggregate(records, now)
}
