//! The statutory "greater of" comparison.
//!
//! Holiday pay must be at least the greater of OWP and AWE; BAPS leave at
//! least the greater of RDP and ADP. [`select_leave_comparison`] computes both
//! sides and records which one binds.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    ComparisonKind, ComparisonResult, OrdinaryPay, PayPeriod, RateSource, RateTriple, WorkPattern,
};

use super::estimators::{
    average_daily_pay, average_weekly_earnings, estimated_owp, relevant_daily_pay,
};

/// Pay periods shorter than this many weeks do not carry enough history for
/// an actual OWP or RDP.
pub const DEFAULT_SUFFICIENT_HISTORY_WEEKS: i64 = 4;

/// Everything the selector needs, gathered once per payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonInputs {
    /// The employee's work pattern.
    pub pattern: WorkPattern,
    /// The pay period being checked.
    pub pay_period: PayPeriod,
    /// Gross year-to-date earnings.
    pub ytd_total: Decimal,
    /// Contracted ordinary pay, if known.
    pub ordinary_pay: Option<OrdinaryPay>,
    /// Date employment began, if known.
    pub employment_start: Option<NaiveDate>,
    /// Effective rate of ordinary time worked this period.
    pub worked_hourly_rate: Decimal,
    /// Date the year-to-date averages are measured to.
    pub today: NaiveDate,
    /// Minimum pay period length, in weeks, for pay history to count.
    pub sufficient_history_weeks: i64,
}

/// Computes both comparison rates for `kind` and selects the binding one.
///
/// The primary rate wins ties. `used_estimate` reports whether the pay period
/// is too short for pay history to be used, but the primary rate is an
/// estimate either way.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::{ComparisonInputs, select_leave_comparison};
/// use nz_leave_pay::models::{ComparisonKind, PayPeriod, RateSource, WorkPattern};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let inputs = ComparisonInputs {
///     pattern: WorkPattern::default(),
///     pay_period: PayPeriod::new(d(2025, 3, 17), d(2025, 3, 30)).unwrap(),
///     ytd_total: Decimal::ZERO,
///     ordinary_pay: None,
///     employment_start: None,
///     worked_hourly_rate: Decimal::from(25),
///     today: d(2025, 3, 31),
///     sufficient_history_weeks: 4,
/// };
///
/// let result = select_leave_comparison(&inputs, ComparisonKind::HolidayPay);
/// assert_eq!(result.selected, RateSource::Primary);
/// assert_eq!(result.primary.weekly, Decimal::from(1000));
/// ```
pub fn select_leave_comparison(inputs: &ComparisonInputs, kind: ComparisonKind) -> ComparisonResult {
    let ordinary_pay = inputs.ordinary_pay.as_ref();

    let (primary, secondary) = match kind {
        ComparisonKind::HolidayPay => (
            estimated_owp(inputs.worked_hourly_rate, ordinary_pay, &inputs.pattern),
            average_weekly_earnings(
                inputs.ytd_total,
                &inputs.pattern,
                inputs.employment_start,
                inputs.today,
            ),
        ),
        ComparisonKind::BapsLeave => (
            relevant_daily_pay(inputs.worked_hourly_rate, ordinary_pay, &inputs.pattern),
            average_daily_pay(
                inputs.ytd_total,
                &inputs.pattern,
                inputs.employment_start,
                inputs.today,
            ),
        ),
    };

    let weeks_in_period = inputs.pay_period.weeks_spanned();

    ComparisonResult {
        kind,
        primary,
        secondary,
        selected: select(&primary, &secondary),
        used_estimate: weeks_in_period < inputs.sufficient_history_weeks,
        weeks_in_period,
    }
}

fn select(primary: &RateTriple, secondary: &RateTriple) -> RateSource {
    if primary.hourly >= secondary.hourly {
        RateSource::Primary
    } else {
        RateSource::Secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EstimatorLabel;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Fortnightly period ending the day before `today`, which is exactly
    /// 52 weeks after the start of the tax year.
    fn inputs(worked: &str, ytd: &str) -> ComparisonInputs {
        ComparisonInputs {
            pattern: WorkPattern::default(),
            pay_period: PayPeriod::new(date(2025, 3, 17), date(2025, 3, 30)).unwrap(),
            ytd_total: dec(ytd),
            ordinary_pay: None,
            employment_start: None,
            worked_hourly_rate: dec(worked),
            today: date(2025, 3, 31),
            sufficient_history_weeks: DEFAULT_SUFFICIENT_HISTORY_WEEKS,
        }
    }

    #[test]
    fn test_secondary_selected_when_higher() {
        // OWP 20/h, AWE 52000 over 52 weeks = 25/h
        let result = select_leave_comparison(&inputs("20", "52000"), ComparisonKind::HolidayPay);

        assert_eq!(result.primary.hourly, dec("20"));
        assert_eq!(result.secondary.hourly, dec("25"));
        assert_eq!(result.selected, RateSource::Secondary);
        assert_eq!(result.selected_label(), EstimatorLabel::Awe);
    }

    #[test]
    fn test_primary_selected_on_tie() {
        let result = select_leave_comparison(&inputs("25", "52000"), ComparisonKind::HolidayPay);

        assert_eq!(result.primary.hourly, result.secondary.hourly);
        assert_eq!(result.selected, RateSource::Primary);
        assert_eq!(result.selected_label(), EstimatorLabel::Owp);
    }

    #[test]
    fn test_baps_comparison_uses_rdp_and_adp() {
        let result = select_leave_comparison(&inputs("30", "52000"), ComparisonKind::BapsLeave);

        assert_eq!(result.kind, ComparisonKind::BapsLeave);
        assert_eq!(result.selected_label(), EstimatorLabel::Rdp);
        assert_eq!(result.primary.daily, dec("240"));
        assert_eq!(result.secondary.daily, dec("200"));
    }

    #[test]
    fn test_no_ytd_selects_owp() {
        let result = select_leave_comparison(&inputs("25", "0"), ComparisonKind::HolidayPay);

        assert_eq!(result.primary, RateTriple::from_hourly(dec("25"), &WorkPattern::default()));
        assert!(result.secondary.is_zero());
        assert_eq!(result.selected, RateSource::Primary);
    }

    #[test]
    fn test_short_period_flags_estimate() {
        let result = select_leave_comparison(&inputs("25", "0"), ComparisonKind::HolidayPay);
        assert_eq!(result.weeks_in_period, 2);
        assert!(result.used_estimate);
    }

    #[test]
    fn test_used_estimate_does_not_change_the_primary_rate() {
        // A four-week period clears the history threshold, yet no actual OWP
        // is computed: the primary rate is the same estimate as for a short
        // period. This pins the gap rather than hiding it.
        let short = inputs("25", "0");
        let mut long = short;
        long.pay_period = PayPeriod::new(date(2025, 3, 3), date(2025, 3, 30)).unwrap();

        let short_result = select_leave_comparison(&short, ComparisonKind::HolidayPay);
        let long_result = select_leave_comparison(&long, ComparisonKind::HolidayPay);

        assert!(short_result.used_estimate);
        assert_eq!(long_result.weeks_in_period, 4);
        assert!(!long_result.used_estimate);
        assert_eq!(short_result.primary, long_result.primary);
    }

    #[test]
    fn test_single_day_period_is_one_week() {
        let mut single = inputs("25", "0");
        single.pay_period = PayPeriod::new(date(2025, 3, 30), date(2025, 3, 30)).unwrap();

        let result = select_leave_comparison(&single, ComparisonKind::BapsLeave);
        assert_eq!(result.weeks_in_period, 1);
    }

    #[test]
    fn test_ordinary_pay_used_when_nothing_worked() {
        let mut no_work = inputs("0", "0");
        no_work.ordinary_pay = Some(OrdinaryPay::annual(dec("52000")));

        let result = select_leave_comparison(&no_work, ComparisonKind::HolidayPay);
        assert_eq!(result.primary.hourly, dec("25"));
    }

    proptest! {
        #[test]
        fn prop_selected_is_the_greater(worked in 0u32..10_000, ytd in 0u32..10_000_000) {
            let mut case = inputs("0", "0");
            case.worked_hourly_rate = Decimal::new(worked as i64, 2);
            case.ytd_total = Decimal::new(ytd as i64, 2);

            for kind in [ComparisonKind::HolidayPay, ComparisonKind::BapsLeave] {
                let result = select_leave_comparison(&case, kind);
                prop_assert_eq!(result.selected_rate().hourly, result.required_hourly_rate());
            }
        }
    }
}
