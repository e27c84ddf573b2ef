//! Ordinary pay rate derivation and the minimum wage check.

use rust_decimal::Decimal;

use crate::models::{MinimumWageCheck, OrdinaryPay, PayBasis, WorkPattern};

use super::unit_normalizer::guard_pattern;

/// Weeks in a year when spreading an annual salary over hours worked.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Returns ordinary pay as an hourly rate.
///
/// An annual salary is divided by the hours of a 52-week year of the given
/// work pattern, saturating if the pattern is too short to divide into it.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::hourly_rate_of;
/// use nz_leave_pay::models::{OrdinaryPay, WorkPattern};
/// use rust_decimal::Decimal;
///
/// let salary = OrdinaryPay::annual(Decimal::from(52000));
/// assert_eq!(hourly_rate_of(&salary, &WorkPattern::default()), Decimal::from(25));
/// ```
pub fn hourly_rate_of(ordinary_pay: &OrdinaryPay, pattern: &WorkPattern) -> Decimal {
    let amount = ordinary_pay.amount.max(Decimal::ZERO);

    match ordinary_pay.basis {
        PayBasis::Hourly => amount,
        PayBasis::Annual => {
            let pattern = guard_pattern(pattern);
            amount
                .checked_div(pattern.hours_per_week() * WEEKS_PER_YEAR)
                .unwrap_or(Decimal::MAX)
        }
    }
}

/// Returns true if ordinary pay meets `minimum_wage` per hour.
///
/// The minimum wage changes every year and is always supplied by the caller,
/// normally from [`ConfigLoader::minimum_wage`](crate::config::ConfigLoader::minimum_wage).
pub fn is_above_minimum_wage(
    ordinary_pay: &OrdinaryPay,
    pattern: &WorkPattern,
    minimum_wage: Decimal,
) -> bool {
    hourly_rate_of(ordinary_pay, pattern) >= minimum_wage
}

/// Checks ordinary pay against the minimum wage, keeping the figures for reporting.
pub fn check_minimum_wage(
    ordinary_pay: &OrdinaryPay,
    pattern: &WorkPattern,
    minimum_wage: Decimal,
) -> MinimumWageCheck {
    let hourly_rate = hourly_rate_of(ordinary_pay, pattern);
    let meets_minimum = hourly_rate >= minimum_wage;

    MinimumWageCheck {
        hourly_rate,
        minimum_wage,
        meets_minimum,
        waived: !meets_minimum && ordinary_pay.allow_below_minimum,
    }
}
