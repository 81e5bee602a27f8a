//! Reporting period models.
//!
//! The attendance service groups records into reporting periods and wraps
//! every list response in an `{ "items": [...] }` envelope.

use serde::{Deserialize, Serialize};

/// A reporting period as listed by the attendance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    /// Identifier used to request the period's records.
    pub period_id: u64,
}

/// List envelope used by the attendance service.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{AttendanceReport, Items};
///
/// let reports: Items<AttendanceReport> =
///     serde_json::from_str(r#"{ "items": [{ "periodId": 7 }] }"#).unwrap();
/// assert_eq!(reports.items[0].period_id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items<T> {
    /// The listed entries.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Items<T> {
    /// Unwraps the envelope.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
