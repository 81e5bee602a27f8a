//! Request types for the Overtime Engine API.
//!
//! This module defines the JSON request structure for the `/overtime`
//! endpoint. Records use the attendance service's own camelCase shape so they
//! can be forwarded as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::OvertimePolicy;
use crate::models::AttendanceRecord;

/// Request body for the `/overtime` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The records of the reporting period.
    pub records: Vec<AttendanceRecord>,
    /// The instant to evaluate against; the server clock when absent.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    /// Policy to use instead of the server default.
    #[serde(default)]
    pub policy: Option<OvertimePolicy>,
    /// Prefix positive balances with `+` in the formatted value.
    #[serde(default)]
    pub signed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_overtime_request() {
        let json = r#"{
            "records": [
                {
                    "date": "2026-01-15",
                    "checkInStamp": { "roundedDatetime": "2026-01-15T02:00:00Z" },
                    "checkOutStamp": null,
                    "actualWorkingMinutes": 0,
                    "flows": [],
                    "workingDay": { "workingMinutes": 480, "breaks": [] }
                }
            ],
            "now": "2026-01-15T11:00:00Z",
            "policy": { "floor_at_zero": true }
        }"#;

        let request: OvertimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert!(request.now.is_some());
        assert!(request.policy.unwrap().floor_at_zero);
        assert!(!request.signed);
    }

    #[test]
    fn test_optional_fields_default() {
        let request: OvertimeRequest = serde_json::from_str(r#"{ "records": [] }"#).unwrap();
        assert!(request.records.is_empty());
        assert!(request.now.is_none());
        assert!(request.policy.is_none());
    }
}
