//! Core data models for the leave pay compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis_result;
mod compliance;
mod pay_entry;
mod pay_period;
mod payslip;
mod rates;
mod work_pattern;

pub use analysis_result::{
    AnalysisTotals, AuditStep, AuditTrace, AuditWarning, EntryAnalysis, PayAnalysisReport,
};
pub use compliance::{ComplianceCheck, ComplianceStatus, MinimumWageCheck};
pub use pay_entry::{ComparisonKind, LeaveCategory, OrdinaryPay, PayBasis, PayEntry};
pub use pay_period::{PayPeriod, weeks_between};
pub use payslip::{
    BapsLeave, EmploymentConditions, HolidayPay, PayslipData, PayslipPeriod, WorkedTime,
    YearToDateEarnings,
};
pub use rates::{ComparisonResult, EstimatorLabel, NamedRate, RateSource, RateSummary, RateTriple};
pub use work_pattern::{
    DEFAULT_DAYS_PER_WEEK, DEFAULT_HOURS_PER_DAY, MAX_DAYS_PER_WEEK, MAX_HOURS_PER_DAY, TimeUnit,
    WorkPattern,
};
