//! Ordinary pay, pay entries and leave categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeUnit;

/// How an ordinary pay amount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Amount is an hourly rate.
    #[default]
    Hourly,
    /// Amount is an annual salary.
    Annual,
}

/// The employee's contracted base rate of pay.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::{OrdinaryPay, PayBasis};
/// use rust_decimal::Decimal;
///
/// let salary = OrdinaryPay::annual(Decimal::from(52000));
/// assert_eq!(salary.basis, PayBasis::Annual);
/// assert!(!salary.allow_below_minimum);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryPay {
    /// The amount, per hour or per year depending on `basis`.
    pub amount: Decimal,
    /// Whether `amount` is hourly or annual.
    pub basis: PayBasis,
    /// Set when the employee is lawfully paid below the adult minimum wage
    /// (starting-out or training rates); suppresses the minimum wage warning.
    #[serde(default)]
    pub allow_below_minimum: bool,
}

impl OrdinaryPay {
    /// Ordinary pay expressed as an hourly rate.
    pub fn hourly(amount: Decimal) -> Self {
        Self {
            amount,
            basis: PayBasis::Hourly,
            allow_below_minimum: false,
        }
    }

    /// Ordinary pay expressed as an annual salary.
    pub fn annual(amount: Decimal) -> Self {
        Self {
            amount,
            basis: PayBasis::Annual,
            allow_below_minimum: false,
        }
    }
}

/// A single line of worked time or leave from a payslip.
///
/// `total` is trusted as entered. It is normally `quantity * rate_per_unit`,
/// but compliance is judged on `total`, not on the stated rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayEntry {
    /// How much time, in `unit`s.
    pub quantity: Decimal,
    /// Unit of `quantity`.
    pub unit: TimeUnit,
    /// Stated rate per unit.
    pub rate_per_unit: Decimal,
    /// Amount paid for this line.
    pub total: Decimal,
}

impl PayEntry {
    /// Builds an entry whose total is `quantity * rate_per_unit`, saturating
    /// at the limits of `Decimal`.
    pub fn priced(quantity: Decimal, unit: TimeUnit, rate_per_unit: Decimal) -> Self {
        Self {
            quantity,
            unit,
            rate_per_unit,
            total: quantity.saturating_mul(rate_per_unit),
        }
    }

    /// An entry takes part in compliance analysis only when both its
    /// quantity and its total are positive.
    pub fn is_active(&self) -> bool {
        self.quantity > Decimal::ZERO && self.total > Decimal::ZERO
    }

    /// Returns true if any money was paid on this line, with or without time.
    pub fn is_paid(&self) -> bool {
        self.total > Decimal::ZERO
    }
}

/// Which pair of statutory rates a leave payment is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    /// Annual holidays: OWP vs AWE.
    HolidayPay,
    /// Bereavement, alternative holidays, public holidays, sick leave: RDP vs ADP.
    BapsLeave,
}

/// Leave category of a payslip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Sick leave (BAPS).
    SickLeave,
    /// Public holidays taken or paid (BAPS).
    PublicHolidays,
    /// Bereavement, alternative holidays and other BAPS leave.
    OtherBaps,
    /// Annual leave (holiday pay).
    AnnualLeave,
    /// Other holiday pay, e.g. holiday pay on termination.
    OtherHoliday,
}

impl LeaveCategory {
    /// The comparison this category is judged by.
    pub fn comparison_kind(&self) -> ComparisonKind {
        match self {
            LeaveCategory::SickLeave | LeaveCategory::PublicHolidays | LeaveCategory::OtherBaps => {
                ComparisonKind::BapsLeave
            }
            LeaveCategory::AnnualLeave | LeaveCategory::OtherHoliday => ComparisonKind::HolidayPay,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::SickLeave => "Sick Leave",
            LeaveCategory::PublicHolidays => "Public Holidays",
            LeaveCategory::OtherBaps => "Other BAPS Leave",
            LeaveCategory::AnnualLeave => "Annual Leave",
            LeaveCategory::OtherHoliday => "Other Holiday Pay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_priced_entry_computes_total() {
        let entry = PayEntry::priced(dec("7.5"), TimeUnit::Hours, dec("24.80"));
        assert_eq!(entry.total, dec("186.00"));
    }

    #[test]
    fn test_priced_entry_saturates() {
        let entry = PayEntry::priced(Decimal::MAX, TimeUnit::Hours, dec("2"));
        assert_eq!(entry.total, Decimal::MAX);
    }

    #[test]
    fn test_entry_with_zero_quantity_is_inactive() {
        let entry = PayEntry {
            quantity: Decimal::ZERO,
            unit: TimeUnit::Days,
            rate_per_unit: dec("200"),
            total: dec("200"),
        };
        assert!(!entry.is_active());
        assert!(entry.is_paid());
    }

    #[test]
    fn test_entry_with_zero_total_is_inactive() {
        let entry = PayEntry {
            quantity: dec("1"),
            unit: TimeUnit::Days,
            rate_per_unit: Decimal::ZERO,
            total: Decimal::ZERO,
        };
        assert!(!entry.is_active());
    }

    #[test]
    fn test_default_entry_is_inactive() {
        assert!(!PayEntry::default().is_active());
    }

    #[test]
    fn test_categories_map_to_comparison_kinds() {
        assert_eq!(
            LeaveCategory::SickLeave.comparison_kind(),
            ComparisonKind::BapsLeave
        );
        assert_eq!(
            LeaveCategory::PublicHolidays.comparison_kind(),
            ComparisonKind::BapsLeave
        );
        assert_eq!(
            LeaveCategory::OtherBaps.comparison_kind(),
            ComparisonKind::BapsLeave
        );
        assert_eq!(
            LeaveCategory::AnnualLeave.comparison_kind(),
            ComparisonKind::HolidayPay
        );
        assert_eq!(
            LeaveCategory::OtherHoliday.comparison_kind(),
            ComparisonKind::HolidayPay
        );
    }

    #[test]
    fn test_ordinary_pay_deserializes_without_allow_flag() {
        let json = r#"{ "amount": "25.00", "basis": "hourly" }"#;
        let pay: OrdinaryPay = serde_json::from_str(json).unwrap();
        assert_eq!(pay.amount, dec("25.00"));
        assert_eq!(pay.basis, PayBasis::Hourly);
        assert!(!pay.allow_below_minimum);
    }

    #[test]
    fn test_pay_entry_serialization() {
        let entry = PayEntry::priced(dec("2"), TimeUnit::Days, dec("200"));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"unit\":\"days\""));
        assert!(json.contains("\"total\":\"400\""));
    }
}
