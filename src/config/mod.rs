//! Configuration loading and management for the leave pay compliance engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files, including jurisdiction metadata, calculation settings, and the
//! minimum wage schedule.
//!
//! # Example
//!
//! ```no_run
//! use nz_leave_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nz").unwrap();
//! println!("Loaded jurisdiction: {}", config.config().jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComplianceSettings, EngineConfig, EngineSettings, JurisdictionMetadata, MinimumWageSchedule,
    WorkPatternDefaults,
};
