//! Calculation logic for the leave pay compliance engine.
//!
//! This module contains the unit normalizer, ordinary rate derivation and
//! minimum wage check, the four statutory rate estimators (OWP, AWE, RDP and
//! ADP), the "greater of" comparison, the compliance checker, the rate
//! summary, and the end-to-end payslip analysis that ties them together.
//!
//! Every function here is pure apart from [`analyse_payslip`], which stamps
//! its report with an id and timestamp.

mod comparison;
mod compliance;
mod estimators;
mod payslip_analysis;
mod rate_deriver;
mod rate_summary;
mod unit_normalizer;
mod worked_rate;

pub use comparison::{ComparisonInputs, DEFAULT_SUFFICIENT_HISTORY_WEEKS, select_leave_comparison};
pub use compliance::{DEFAULT_COMPLIANCE_TOLERANCE, check_compliance};
pub use estimators::{
    TAX_YEAR_START_DAY, TAX_YEAR_START_MONTH, average_daily_pay, average_weekly_earnings,
    averaging_window_start, estimated_owp, relevant_daily_pay, tax_year_start,
};
pub use payslip_analysis::{
    WARNING_BELOW_MINIMUM_WAGE, WARNING_ENTRY_NOT_COMPUTABLE, WARNING_INSUFFICIENT_DATA,
    WARNING_LEAVE_UNDERPAID, WARNING_MINIMUM_WAGE_UNKNOWN, WARNING_PAYMENT_WITHOUT_TIME,
    WARNING_SHORT_PAY_HISTORY, WARNING_SIGNIFICANT_RATE_DIFFERENCE,
    WARNING_WORK_PATTERN_DEFAULTED, WARNING_WORKED_RATE_BELOW_ORDINARY, analyse_payslip,
};
pub use rate_deriver::{WEEKS_PER_YEAR, check_minimum_wage, hourly_rate_of, is_above_minimum_wage};
pub use rate_summary::{DEFAULT_SIGNIFICANT_DIFFERENCE_PERCENT, summarize_rates};
pub use unit_normalizer::{entry_hours, to_hours};
pub use worked_rate::{worked_hourly_rate, ytd_hourly_rate};
