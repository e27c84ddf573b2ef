//! Statutory comparison rate estimators.
//!
//! Holiday pay is the greater of Ordinary Weekly Pay (OWP) and Average Weekly
//! Earnings (AWE); BAPS leave is the greater of Relevant Daily Pay (RDP) and
//! Average Daily Pay (ADP). This module estimates all four as [`RateTriple`]s.
//!
//! OWP and RDP are always *estimates* built from the current worked rate or
//! the contracted ordinary rate. The four-week lookback over historical
//! payslips that the Holidays Act describes is not computed, because no pay
//! history is available to the engine.
//!
//! Nothing in this module reads the clock; the date the averages are measured
//! to is always passed in as `today`.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{OrdinaryPay, RateTriple, WorkPattern, weeks_between};

use super::rate_deriver::hourly_rate_of;
use super::unit_normalizer::guard_pattern;

/// Month the New Zealand tax year begins.
pub const TAX_YEAR_START_MONTH: u32 = 4;

/// Day of month the New Zealand tax year begins.
pub const TAX_YEAR_START_DAY: u32 = 1;

/// Returns the start of the tax year containing `today`: the most recent
/// April 1 on or before it.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::tax_year_start;
/// use chrono::NaiveDate;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(tax_year_start(d(2024, 3, 31)), d(2023, 4, 1));
/// assert_eq!(tax_year_start(d(2024, 4, 1)), d(2024, 4, 1));
/// ```
pub fn tax_year_start(today: NaiveDate) -> NaiveDate {
    let this_year = april_first(today.year());
    if today >= this_year {
        this_year
    } else {
        april_first(today.year() - 1)
    }
}

fn april_first(year: i32) -> NaiveDate {
    // April 1 exists in every year chrono can represent here
    NaiveDate::from_ymd_opt(year, TAX_YEAR_START_MONTH, TAX_YEAR_START_DAY)
        .unwrap_or(NaiveDate::MIN)
}

/// Start of the averaging window: the later of the tax year start and the
/// employment start date.
pub fn averaging_window_start(today: NaiveDate, employment_start: Option<NaiveDate>) -> NaiveDate {
    let tax_year = tax_year_start(today);
    match employment_start {
        Some(start) if start > tax_year => start,
        _ => tax_year,
    }
}

/// Estimated Ordinary Weekly Pay.
///
/// Uses `worked_hourly_rate` when it is positive, otherwise the ordinary pay
/// rate, otherwise zero.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::estimated_owp;
/// use nz_leave_pay::models::{OrdinaryPay, WorkPattern};
/// use rust_decimal::Decimal;
///
/// let ordinary = OrdinaryPay::hourly(Decimal::from(24));
/// let owp = estimated_owp(Decimal::ZERO, Some(&ordinary), &WorkPattern::default());
/// assert_eq!(owp.weekly, Decimal::from(960));
/// ```
pub fn estimated_owp(
    worked_hourly_rate: Decimal,
    ordinary_pay: Option<&OrdinaryPay>,
    pattern: &WorkPattern,
) -> RateTriple {
    let pattern = guard_pattern(pattern);

    let hourly = if worked_hourly_rate > Decimal::ZERO {
        worked_hourly_rate
    } else if let Some(ordinary_pay) = ordinary_pay {
        hourly_rate_of(ordinary_pay, &pattern)
    } else {
        Decimal::ZERO
    };

    RateTriple::from_hourly(hourly, &pattern)
}

/// Average Weekly Earnings.
///
/// Year-to-date earnings averaged over the whole weeks (rounded up, at least
/// one) since [`averaging_window_start`].
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::average_weekly_earnings;
/// use nz_leave_pay::models::WorkPattern;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Ten weeks into the tax year
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let awe = average_weekly_earnings(Decimal::from(9000), &WorkPattern::default(), None, today);
/// assert_eq!(awe.weekly, Decimal::from(900));
/// ```
pub fn average_weekly_earnings(
    ytd_total: Decimal,
    pattern: &WorkPattern,
    employment_start: Option<NaiveDate>,
    today: NaiveDate,
) -> RateTriple {
    let pattern = guard_pattern(pattern);
    let window_start = averaging_window_start(today, employment_start);
    let weeks = Decimal::from(weeks_between(window_start, today));

    RateTriple::from_weekly(ytd_total.max(Decimal::ZERO) / weeks, &pattern)
}

/// Relevant Daily Pay, estimated the same way as [`estimated_owp`].
///
/// `worked_hourly_rate` should come from time actually worked in the current
/// period; ordinary pay is the fallback.
pub fn relevant_daily_pay(
    worked_hourly_rate: Decimal,
    ordinary_pay: Option<&OrdinaryPay>,
    pattern: &WorkPattern,
) -> RateTriple {
    estimated_owp(worked_hourly_rate, ordinary_pay, pattern)
}

/// Average Daily Pay. Computed exactly as [`average_weekly_earnings`]; the two
/// differ only in which rate they are compared against.
pub fn average_daily_pay(
    ytd_total: Decimal,
    pattern: &WorkPattern,
    employment_start: Option<NaiveDate>,
    today: NaiveDate,
) -> RateTriple {
    average_weekly_earnings(ytd_total, pattern, employment_start, today)
}
