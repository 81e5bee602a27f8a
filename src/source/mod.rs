//! Attendance data sources.
//!
//! A source lists the reporting periods available to the user and the daily
//! records of one period. The engine does not care about transport: the
//! [`HttpAttendanceSource`] talks to the attendance service and the
//! [`StaticSource`] serves records held in memory or read from a file.

mod http;
mod memory;

use std::future::Future;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceReport};

pub use http::HttpAttendanceSource;
pub use memory::{StaticSource, load_records_file};

/// Read access to attendance data.
pub trait AttendanceSource: Send + Sync {
    /// Lists reporting periods, most recent first.
    fn list_periods(&self) -> impl Future<Output = EngineResult<Vec<AttendanceReport>>> + Send;

    /// Lists the daily records of a reporting period, in date order.
    fn list_records(
        &self,
        period_id: u64,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;
}
