//! In-memory attendance source and offline record files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceReport, Items};

use super::AttendanceSource;

/// Serves periods and records held in memory.
///
/// Periods are listed in insertion order, so the first period added is the
/// one picked when no period id is given.
///
/// # Example
///
/// ```
/// use overtime_engine::source::StaticSource;
///
/// let source = StaticSource::new().with_period(7, vec![]);
/// assert_eq!(source.period_ids(), vec![7]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    reports: Vec<AttendanceReport>,
    records: HashMap<u64, Vec<AttendanceRecord>>,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a period and its records.
    pub fn with_period(mut self, period_id: u64, records: Vec<AttendanceRecord>) -> Self {
        if !self.records.contains_key(&period_id) {
            self.reports.push(AttendanceReport { period_id });
        }
        self.records.insert(period_id, records);
        self
    }

    /// The listed period ids, in order.
    pub fn period_ids(&self) -> Vec<u64> {
        self.reports.iter().map(|r| r.period_id).collect()
    }
}

impl AttendanceSource for StaticSource {
    async fn list_periods(&self) -> EngineResult<Vec<AttendanceReport>> {
        Ok(self.reports.clone())
    }

    async fn list_records(&self, period_id: u64) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self.records.get(&period_id).cloned().unwrap_or_default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    Wrapped(Items<AttendanceRecord>),
    Bare(Vec<AttendanceRecord>),
}

/// Reads records from a JSON file.
///
/// Accepts either the service's `{ "items": [...] }` envelope or a bare
/// array.
pub fn load_records_file<P: AsRef<Path>>(path: P) -> EngineResult<Vec<AttendanceRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| EngineError::RecordsFileError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let parsed: RecordsFile =
        serde_json::from_str(&content).map_err(|e| EngineError::RecordsFileError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let records = match parsed {
        RecordsFile::Wrapped(items) => items.into_inner(),
        RecordsFile::Bare(records) => records,
    };
    info!(path = %path_str, count = records.len(), "Loaded records file");
    Ok(records)
}
