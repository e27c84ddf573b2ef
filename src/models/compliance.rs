//! Compliance and minimum wage check results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of checking one leave payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Paid at or above the binding rate.
    Compliant,
    /// Paid below the binding rate.
    NonCompliant,
    /// The entry's time converts to zero hours, so no paid rate exists.
    NotComputable,
    /// Both comparison rates are zero; there is nothing to compare against.
    InsufficientData,
}

/// Result of checking a paid leave entry against its comparison rates.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::{ComplianceCheck, ComplianceStatus};
/// use rust_decimal::Decimal;
///
/// let check = ComplianceCheck {
///     hours_equivalent: Decimal::from(8),
///     paid_hourly_rate: Some(Decimal::from(25)),
///     required_hourly_rate: Decimal::from(25),
///     status: ComplianceStatus::Compliant,
///     shortfall: Decimal::ZERO,
/// };
/// assert!(check.is_compliant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    /// The entry's time converted to hours.
    pub hours_equivalent: Decimal,
    /// `total / hours_equivalent`; absent when not computable.
    pub paid_hourly_rate: Option<Decimal>,
    /// The greater of the two comparison hourly rates.
    pub required_hourly_rate: Decimal,
    /// The outcome.
    pub status: ComplianceStatus,
    /// Amount underpaid for this entry, zero unless non-compliant.
    pub shortfall: Decimal,
}

impl ComplianceCheck {
    /// Returns true only for [`ComplianceStatus::Compliant`].
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

/// Result of checking ordinary pay against the minimum wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageCheck {
    /// Ordinary pay as an hourly rate.
    pub hourly_rate: Decimal,
    /// The minimum wage it was compared against.
    pub minimum_wage: Decimal,
    /// `hourly_rate >= minimum_wage`.
    pub meets_minimum: bool,
    /// True when a shortfall is permitted (starting-out or training rates).
    pub waived: bool,
}
