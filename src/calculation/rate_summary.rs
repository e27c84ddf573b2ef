//! Side-by-side summary of the hourly rates found on a payslip.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{NamedRate, RateSummary};

use super::estimators::TAX_YEAR_START_MONTH;

/// Spread between highest and lowest rate, in percent, above which the
/// difference is worth raising with the employer.
pub const DEFAULT_SIGNIFICANT_DIFFERENCE_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Summarizes the worked-time, year-to-date and ordinary hourly rates.
///
/// Zero rates are left out. When the spread between the highest and lowest
/// rate exceeds `threshold_percent` the difference is flagged, and if no
/// employment start date is known after the tax year has turned over, the
/// summary suggests supplying one.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::summarize_rates;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
/// let summary = summarize_rates(
///     Decimal::from(25),
///     Decimal::from(20),
///     Decimal::ZERO,
///     Decimal::from(5),
///     None,
///     today,
/// );
///
/// assert_eq!(summary.rates.len(), 2);
/// assert_eq!(summary.difference_percent, Some(Decimal::from(25)));
/// assert!(summary.significant_difference);
/// ```
pub fn summarize_rates(
    worked_hourly_rate: Decimal,
    ytd_hourly_rate: Decimal,
    ordinary_hourly_rate: Decimal,
    threshold_percent: Decimal,
    employment_start: Option<NaiveDate>,
    today: NaiveDate,
) -> RateSummary {
    let rates: Vec<NamedRate> = [
        ("Worked Time Rate", worked_hourly_rate),
        ("YTD Average Rate", ytd_hourly_rate),
        ("Ordinary Pay Rate", ordinary_hourly_rate),
    ]
    .into_iter()
    .filter(|(_, hourly)| *hourly > Decimal::ZERO)
    .map(|(label, hourly)| NamedRate {
        label: label.to_string(),
        hourly,
    })
    .collect();

    let highest = rates.iter().map(|r| r.hourly).max();
    let lowest = rates.iter().map(|r| r.hourly).min();

    let difference_percent = match (highest, lowest) {
        (Some(high), Some(low)) => Some(
            (high - low)
                .checked_div(low)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX),
        ),
        _ => None,
    };

    let significant_difference = difference_percent.is_some_and(|d| d > threshold_percent);

    // Only after April in the calendar year, matching the form's hint
    let past_tax_year_start = today.month() > TAX_YEAR_START_MONTH
        || (today.month() == TAX_YEAR_START_MONTH && today.day() > 1);

    RateSummary {
        rates,
        highest,
        lowest,
        difference_percent,
        significant_difference,
        suggest_start_date: significant_difference
            && employment_start.is_none()
            && past_tax_year_start,
    }
}
