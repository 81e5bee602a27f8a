//! Overtime summary models.
//!
//! This module contains [`OvertimeSummary`], the detailed output of an
//! aggregation pass: the three running totals, the derived overtime figure,
//! how each record was classified and warnings for records that were skipped
//! as unreconciled.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How a record was treated by the aggregator.
///
/// # Example
///
/// ```
/// use overtime_engine::models::RecordClass;
///
/// assert_eq!(serde_json::to_string(&RecordClass::InProgress).unwrap(), "\"in_progress\"");
/// assert!(RecordClass::Completed.contributes());
/// assert!(!RecordClass::Future.contributes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordClass {
    /// No working day scheduled.
    NotScheduled,
    /// Dated after today.
    Future,
    /// Checked in and out.
    Completed,
    /// Today, checked in, not yet checked out.
    InProgress,
    /// Full-day leave with no punches.
    LeaveDay,
    /// Any other combination of stamps and dates.
    Unreconciled,
}

impl RecordClass {
    /// Returns true if records of this class add to the totals.
    pub fn contributes(self) -> bool {
        matches!(
            self,
            RecordClass::Completed | RecordClass::InProgress | RecordClass::LeaveDay
        )
    }
}

impl std::fmt::Display for RecordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordClass::NotScheduled => write!(f, "not scheduled"),
            RecordClass::Future => write!(f, "future"),
            RecordClass::Completed => write!(f, "completed"),
            RecordClass::InProgress => write!(f, "in progress"),
            RecordClass::LeaveDay => write!(f, "leave day"),
            RecordClass::Unreconciled => write!(f, "unreconciled"),
        }
    }
}

/// What a single record added to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContribution {
    /// The record's date.
    pub date: NaiveDate,
    /// How the record was classified.
    pub class: RecordClass,
    /// Minutes added to the scheduled total.
    pub scheduled_minutes: i64,
    /// Minutes added to the actual total.
    pub actual_minutes: i64,
    /// Minutes added to the leave-credit total.
    pub leave_credit_minutes: i64,
}

impl RecordContribution {
    /// A contribution of zero minutes for a record that was skipped.
    pub fn skipped(date: NaiveDate, class: RecordClass) -> Self {
        Self {
            date,
            class,
            scheduled_minutes: 0,
            actual_minutes: 0,
            leave_credit_minutes: 0,
        }
    }
}

/// A data-quality warning raised for a skipped record.
///
/// Warnings never change the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// The date of the record the warning is about.
    pub date: NaiveDate,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The result of aggregating a list of attendance records.
///
/// `overtime_minutes` is `actual - scheduled + leave credit`, clamped at zero
/// when `floored` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSummary {
    /// The instant the records were evaluated against.
    pub evaluated_at: DateTime<Utc>,
    /// Total scheduled minutes.
    pub scheduled_minutes: i64,
    /// Total actual minutes, including the live estimate for today.
    pub actual_minutes: i64,
    /// Total leave credit.
    pub leave_credit_minutes: i64,
    /// The derived overtime balance.
    pub overtime_minutes: i64,
    /// Whether the floor-at-zero policy was applied.
    pub floored: bool,
    /// One entry per input record, in input order.
    pub contributions: Vec<RecordContribution>,
    /// Warnings for unreconciled records.
    pub warnings: Vec<DataWarning>,
}

impl OvertimeSummary {
    /// Number of records that added to the totals.
    pub fn counted_records(&self) -> usize {
        self.contributions
            .iter()
            .filter(|c| c.class.contributes())
            .count()
    }
}
