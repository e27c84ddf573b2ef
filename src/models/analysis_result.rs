//! Analysis report models.
//!
//! This module contains the [`PayAnalysisReport`] type and its associated
//! structures that capture every output of a payslip analysis, including the
//! per-entry compliance results, totals, and audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ComparisonResult, ComplianceCheck, EstimatorLabel, LeaveCategory, MinimumWageCheck,
    PayEntry, PayPeriod, RateSummary, WorkPattern,
};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute section for this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during analysis.
///
/// Warnings flag conditions that don't stop the analysis but that the
/// employee may want to raise with their employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during analysis.
    pub warnings: Vec<AuditWarning>,
    /// The total analysis duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with `code` was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The analysis of one active leave line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAnalysis {
    /// Leave category of the line.
    pub category: LeaveCategory,
    /// Display label of the category.
    pub label: String,
    /// The line as entered.
    pub entry: PayEntry,
    /// Which estimator's rate was binding.
    pub binding_rate: EstimatorLabel,
    /// The compliance outcome.
    pub check: ComplianceCheck,
}

/// Aggregated totals for an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisTotals {
    /// Number of active leave lines checked.
    pub entries_checked: u32,
    /// Number of lines found non-compliant.
    pub entries_non_compliant: u32,
    /// Sum of shortfalls across all lines.
    pub total_shortfall: Decimal,
}

/// The complete result of analysing one payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAnalysisReport {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The date the year-to-date averages were measured to.
    pub as_of: NaiveDate,
    /// The pay period analysed.
    pub pay_period: PayPeriod,
    /// The work pattern used for every conversion.
    pub work_pattern: WorkPattern,
    /// Effective hourly rate of ordinary worked time.
    pub worked_hourly_rate: Decimal,
    /// Year-to-date earnings spread over a standard year.
    pub ytd_hourly_rate: Decimal,
    /// Ordinary pay against the minimum wage, when ordinary pay is known.
    pub minimum_wage: Option<MinimumWageCheck>,
    /// OWP vs AWE.
    pub holiday_comparison: ComparisonResult,
    /// RDP vs ADP.
    pub baps_comparison: ComparisonResult,
    /// One result per active leave line.
    pub entries: Vec<EntryAnalysis>,
    /// Side-by-side rate summary.
    pub rate_summary: RateSummary,
    /// Aggregated totals.
    pub totals: AnalysisTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
