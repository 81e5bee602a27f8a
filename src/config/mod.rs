//! Configuration loading and management for the Overtime Engine.
//!
//! This module loads the attendance service settings and the aggregation
//! policy from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/overtime.yaml").unwrap();
//! println!("Floor at zero: {}", config.policy().floor_at_zero);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_BASE_URL, EngineConfig, SourceConfig};
