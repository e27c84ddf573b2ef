//! Effective hourly rates taken from the payslip itself.

use rust_decimal::Decimal;

use crate::models::{PayEntry, WorkPattern};

use super::rate_deriver::WEEKS_PER_YEAR;
use super::unit_normalizer::{entry_hours, guard_pattern};

/// Effective hourly rate of ordinary worked time.
///
/// An active entry yields `total / hours`; otherwise, or when that division
/// is out of range, its stated rate per hour is used, and zero when there is
/// neither.
pub fn worked_hourly_rate(worked_time: &PayEntry, pattern: &WorkPattern) -> Decimal {
    let hours = entry_hours(worked_time, pattern);

    if worked_time.is_active() && hours > Decimal::ZERO {
        if let Some(rate) = worked_time.total.checked_div(hours) {
            return rate;
        }
    }

    let unit_hours = entry_hours(
        &PayEntry {
            quantity: Decimal::ONE,
            ..*worked_time
        },
        pattern,
    );
    if worked_time.rate_per_unit > Decimal::ZERO && unit_hours > Decimal::ZERO {
        worked_time
            .rate_per_unit
            .checked_div(unit_hours)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Year-to-date earnings spread over a 52-week year of the work pattern.
pub fn ytd_hourly_rate(ytd_total: Decimal, pattern: &WorkPattern) -> Decimal {
    let pattern = guard_pattern(pattern);
    ytd_total
        .max(Decimal::ZERO)
        .checked_div(pattern.hours_per_week() * WEEKS_PER_YEAR)
        .unwrap_or(Decimal::MAX)
}
