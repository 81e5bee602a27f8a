//! Configuration types for the Overtime Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::calculation::OvertimePolicy;

/// Default base URL of the attendance service API.
pub const DEFAULT_BASE_URL: &str = "https://a-rakumo.appspot.com/api/attendance/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Where and as whom to read attendance data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the attendance API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The user whose records are read.
    pub user_id: String,
    /// Period id sent when listing reports.
    pub default_period_id: u64,
    /// Session cookie forwarded with every request.
    #[serde(default)]
    pub cookie: Option<String>,
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Attendance service settings.
    pub source: SourceConfig,
    /// Aggregation policy.
    #[serde(default)]
    pub policy: OvertimePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let yaml = r#"
source:
  user_id: "user@example.com"
  default_period_id: 1
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source.cookie, None);
        assert_eq!(config.policy, OvertimePolicy::default());
    }

    #[test]
    fn test_policy_overrides() {
        let yaml = r#"
source:
  user_id: "user@example.com"
  default_period_id: 1
policy:
  floor_at_zero: true
  break_start: "03:00:00"
  pm_minutes: 300
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.policy.floor_at_zero);
        assert_eq!(
            config.policy.break_start,
            NaiveTime::from_hms_opt(3, 0, 0).unwrap()
        );
        assert_eq!(config.policy.leave.am_minutes, 210);
        assert_eq!(config.policy.leave.pm_minutes, 300);
    }

    #[test]
    fn test_missing_user_is_an_error() {
        let yaml = "source:\n  default_period_id: 1\n";
        assert!(serde_yaml::from_str::<EngineConfig>(yaml).is_err());
    }
}
