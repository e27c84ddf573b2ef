//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineSettings, MinimumWageSchedule};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query settings and minimum wage rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/nz/
/// ├── engine.yaml          # Jurisdiction metadata and calculation settings
/// └── minimum_wage/
///     └── 2024-04-01.yaml  # Minimum wage rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use nz_leave_pay::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/nz").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let schedule = loader.minimum_wage(date).unwrap();
/// println!("Adult minimum wage: ${}", schedule.adult);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let minimum_wages = Self::load_minimum_wages(&path.join("minimum_wage"))?;

        Ok(Self {
            config: EngineConfig::new(settings, minimum_wages),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the minimum wage directory.
    fn load_minimum_wages(dir: &Path) -> EngineResult<Vec<MinimumWageSchedule>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                schedules.push(Self::load_yaml::<MinimumWageSchedule>(&path)?);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no minimum wage files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets the minimum wage schedule in force on a given date.
    ///
    /// The most recent schedule effective on or before `date` applies.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nz_leave_pay::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/nz")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    /// let schedule = loader.minimum_wage(date)?;
    /// println!("Adult minimum wage: ${}", schedule.adult);
    /// # Ok::<(), nz_leave_pay::error::EngineError>(())
    /// ```
    pub fn minimum_wage(&self, date: NaiveDate) -> EngineResult<&MinimumWageSchedule> {
        self.config
            .minimum_wages()
            .iter()
            .rfind(|s| s.effective_date <= date)
            .ok_or(EngineError::MinimumWageNotFound { date })
    }
}
