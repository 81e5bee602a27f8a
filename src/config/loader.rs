//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::OvertimePolicy;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, SourceConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// source:
///   base_url: https://a-rakumo.appspot.com/api/attendance/v1
///   user_id: "user@example.com"
///   default_period_id: 1
///   cookie: null
/// policy:
///   floor_at_zero: false
///   deduct_late_penalties: false
///   break_start: "04:00:00"
///   am_minutes: 210
///   pm_minutes: 270
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/overtime.yaml")?;
/// println!("Reading records for {}", loader.source().user_id);
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or misses a required field
    /// - `source.base_url` or `source.user_id` is blank
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, user_id = %loader.source().user_id, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.source.base_url.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "source.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.source.user_id.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "source.user_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the attendance service settings.
    pub fn source(&self) -> &SourceConfig {
        &self.config.source
    }

    /// Returns the aggregation policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.config.policy
    }
}
