//! Calculation logic for the Overtime Engine.
//!
//! This module contains the overtime aggregation and its building blocks:
//! minute arithmetic between instants, leave credit, record classification,
//! the live estimate for a day that is still in progress, and the policy
//! switches that shape the result.

mod aggregator;
mod classification;
mod in_progress;
mod leave_credit;
mod minutes;
mod policy;

pub use aggregator::{Accumulator, OvertimeAggregator, UNRECONCILED_RECORD, aggregate};
pub use classification::{classify_record, unreconciled_reason};
pub use in_progress::{InProgressEstimate, estimate_in_progress};
pub use leave_credit::{AM_OFF_MINUTES, LeaveDurations, PM_OFF_MINUTES, leave_credit_minutes};
pub use minutes::{at_time_today, break_minutes, minutes_between, today};
pub use policy::{OvertimePolicy, default_break_start};
