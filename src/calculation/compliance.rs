//! Leave payment compliance checking.

use rust_decimal::Decimal;

use crate::models::{ComparisonResult, ComplianceCheck, ComplianceStatus, PayEntry, WorkPattern};

use super::unit_normalizer::checked_entry_hours;

/// Tolerance applied to the paid rate before comparing it with the required
/// rate, so that cent rounding on a payslip is not reported as underpayment.
pub const DEFAULT_COMPLIANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Checks one leave payment against the binding comparison rate.
///
/// The outcome is never an error:
/// - an entry whose time converts to zero hours, or whose figures are too
///   large or too small to divide out, is [`ComplianceStatus::NotComputable`];
/// - when both comparison rates are zero the result is
///   [`ComplianceStatus::InsufficientData`], never a trivial pass;
/// - otherwise the entry is compliant when `total / hours` is at least the
///   greater of the two hourly rates, less `tolerance`.
///
/// `shortfall` is the amount that would bring the payment up to the required
/// rate. It is zero for anything other than a non-compliant result.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::{DEFAULT_COMPLIANCE_TOLERANCE, check_compliance};
/// use nz_leave_pay::models::{
///     ComparisonKind, ComparisonResult, ComplianceStatus, PayEntry, RateSource, RateTriple,
///     TimeUnit, WorkPattern,
/// };
/// use rust_decimal::Decimal;
///
/// let pattern = WorkPattern::default();
/// let comparison = ComparisonResult {
///     kind: ComparisonKind::HolidayPay,
///     primary: RateTriple::from_hourly(Decimal::from(25), &pattern),
///     secondary: RateTriple::zero(),
///     selected: RateSource::Primary,
///     used_estimate: true,
///     weeks_in_period: 2,
/// };
///
/// // 8 hours of annual leave paid at $24/h
/// let entry = PayEntry::priced(Decimal::from(8), TimeUnit::Hours, Decimal::from(24));
/// let check = check_compliance(&entry, &comparison, &pattern, DEFAULT_COMPLIANCE_TOLERANCE);
///
/// assert_eq!(check.status, ComplianceStatus::NonCompliant);
/// assert_eq!(check.shortfall, Decimal::from(8));
/// ```
pub fn check_compliance(
    entry: &PayEntry,
    comparison: &ComparisonResult,
    pattern: &WorkPattern,
    tolerance: Decimal,
) -> ComplianceCheck {
    let required_hourly_rate = comparison.required_hourly_rate();

    let hours_equivalent = match checked_entry_hours(entry, pattern) {
        Some(hours) if !hours.is_zero() => hours,
        _ => return not_computable(Decimal::ZERO, None, required_hourly_rate),
    };

    let Some(paid_hourly_rate) = entry.total.checked_div(hours_equivalent) else {
        return not_computable(hours_equivalent, None, required_hourly_rate);
    };

    if comparison.primary.is_zero() && comparison.secondary.is_zero() {
        return ComplianceCheck {
            hours_equivalent,
            paid_hourly_rate: Some(paid_hourly_rate),
            required_hourly_rate,
            status: ComplianceStatus::InsufficientData,
            shortfall: Decimal::ZERO,
        };
    }

    // Only a paid rate at the top of the range can overflow here
    let meets_required = paid_hourly_rate
        .checked_add(tolerance.abs())
        .is_none_or(|paid| paid >= required_hourly_rate);

    let (status, shortfall) = if meets_required {
        (ComplianceStatus::Compliant, Decimal::ZERO)
    } else {
        let owed = required_hourly_rate
            .checked_mul(hours_equivalent)
            .and_then(|due| due.checked_sub(entry.total));
        match owed {
            Some(owed) => (ComplianceStatus::NonCompliant, owed.max(Decimal::ZERO)),
            None => {
                return not_computable(
                    hours_equivalent,
                    Some(paid_hourly_rate),
                    required_hourly_rate,
                );
            }
        }
    };

    ComplianceCheck {
        hours_equivalent,
        paid_hourly_rate: Some(paid_hourly_rate),
        required_hourly_rate,
        status,
        shortfall,
    }
}

fn not_computable(
    hours_equivalent: Decimal,
    paid_hourly_rate: Option<Decimal>,
    required_hourly_rate: Decimal,
) -> ComplianceCheck {
    ComplianceCheck {
        hours_equivalent,
        paid_hourly_rate,
        required_hourly_rate,
        status: ComplianceStatus::NotComputable,
        shortfall: Decimal::ZERO,
    }
}
