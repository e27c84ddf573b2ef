//! Configuration types for leave pay analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::WorkPattern;

/// Metadata about the jurisdiction whose rules are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code (e.g., "NZ").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// URL to the governing legislation.
    pub source_url: String,
}

/// Default work pattern applied when a payslip gives none.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkPatternDefaults {
    /// Default hours per day.
    pub hours_per_day: Decimal,
    /// Default days per week.
    pub days_per_week: Decimal,
}

impl WorkPatternDefaults {
    /// The defaults as a work pattern, itself normalized in case the
    /// configured values are out of range.
    pub fn work_pattern(&self) -> WorkPattern {
        WorkPattern {
            hours_per_day: self.hours_per_day,
            days_per_week: self.days_per_week,
        }
        .normalized()
    }
}

/// Settings for the compliance decision.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceSettings {
    /// Paid rates this close below the required rate still count as compliant.
    pub tolerance: Decimal,
    /// Pay periods shorter than this many weeks are flagged as relying on estimates.
    pub sufficient_history_weeks: i64,
    /// Spread between highest and lowest rate, in percent, above which a warning is raised.
    pub significant_difference_percent: Decimal,
}

/// Contents of engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Work pattern defaults.
    pub defaults: WorkPatternDefaults,
    /// Compliance settings.
    pub compliance: ComplianceSettings,
}

/// Adult minimum wage effective from a date.
///
/// Starting-out and training rates are not held; ordinary pay flagged with
/// `allow_below_minimum` is exempt from the check instead.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWageSchedule {
    /// The date this rate takes effect.
    pub effective_date: NaiveDate,
    /// Adult minimum wage, per hour.
    pub adult: Decimal,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    settings: EngineSettings,
    /// Minimum wage schedules (sorted oldest first).
    minimum_wages: Vec<MinimumWageSchedule>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, minimum_wages: Vec<MinimumWageSchedule>) -> Self {
        let mut sorted = minimum_wages;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            settings,
            minimum_wages: sorted,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.settings.jurisdiction
    }

    /// Returns the work pattern defaults.
    pub fn defaults(&self) -> &WorkPatternDefaults {
        &self.settings.defaults
    }

    /// Returns the compliance settings.
    pub fn compliance(&self) -> &ComplianceSettings {
        &self.settings.compliance
    }

    /// Returns all minimum wage schedules.
    pub fn minimum_wages(&self) -> &[MinimumWageSchedule] {
        &self.minimum_wages
    }
}
