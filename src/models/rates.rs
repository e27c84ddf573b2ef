//! Rate triples and statutory rate comparisons.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ComparisonKind, WorkPattern};

/// A rate expressed per hour, per day and per week of a work pattern.
///
/// Triples are always derived from a single figure, so the three values stay
/// consistent with the pattern they were built for.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::{RateTriple, WorkPattern};
/// use rust_decimal::Decimal;
///
/// let rate = RateTriple::from_hourly(Decimal::from(25), &WorkPattern::default());
/// assert_eq!(rate.daily, Decimal::from(200));
/// assert_eq!(rate.weekly, Decimal::from(1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateTriple {
    /// Rate per hour.
    pub hourly: Decimal,
    /// Rate per working day.
    pub daily: Decimal,
    /// Rate per working week.
    pub weekly: Decimal,
}

impl RateTriple {
    /// A zero rate.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a triple from an hourly rate.
    ///
    /// Daily and weekly figures beyond `Decimal` range saturate.
    pub fn from_hourly(hourly: Decimal, pattern: &WorkPattern) -> Self {
        let daily = hourly.saturating_mul(pattern.hours_per_day);
        Self {
            hourly,
            daily,
            weekly: daily.saturating_mul(pattern.days_per_week),
        }
    }

    /// Builds a triple from a weekly rate.
    ///
    /// Hourly and daily figures beyond `Decimal` range saturate.
    pub fn from_weekly(weekly: Decimal, pattern: &WorkPattern) -> Self {
        Self {
            hourly: saturating_div(weekly, pattern.hours_per_week()),
            daily: saturating_div(weekly, pattern.days_per_week),
            weekly,
        }
    }

    /// Returns true if the hourly rate is zero.
    pub fn is_zero(&self) -> bool {
        self.hourly.is_zero()
    }
}

fn saturating_div(value: Decimal, divisor: Decimal) -> Decimal {
    value.checked_div(divisor).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Name of the estimator that produced a comparison rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstimatorLabel {
    /// Ordinary Weekly Pay (estimated).
    Owp,
    /// Average Weekly Earnings.
    Awe,
    /// Relevant Daily Pay (estimated).
    Rdp,
    /// Average Daily Pay.
    Adp,
}

impl fmt::Display for EstimatorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EstimatorLabel::Owp => "OWP",
            EstimatorLabel::Awe => "AWE",
            EstimatorLabel::Rdp => "RDP",
            EstimatorLabel::Adp => "ADP",
        };
        f.write_str(label)
    }
}

impl ComparisonKind {
    /// Label of the primary (ordinary-pay based) estimator.
    pub fn primary_label(&self) -> EstimatorLabel {
        match self {
            ComparisonKind::HolidayPay => EstimatorLabel::Owp,
            ComparisonKind::BapsLeave => EstimatorLabel::Rdp,
        }
    }

    /// Label of the secondary (average-earnings based) estimator.
    pub fn secondary_label(&self) -> EstimatorLabel {
        match self {
            ComparisonKind::HolidayPay => EstimatorLabel::Awe,
            ComparisonKind::BapsLeave => EstimatorLabel::Adp,
        }
    }
}

/// Which side of a comparison is binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The OWP or RDP estimate.
    Primary,
    /// The AWE or ADP average.
    Secondary,
}

/// The outcome of the statutory "greater of" comparison for one kind of leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Which pair of rates was compared.
    pub kind: ComparisonKind,
    /// OWP (holiday pay) or RDP (BAPS leave).
    pub primary: RateTriple,
    /// AWE (holiday pay) or ADP (BAPS leave).
    pub secondary: RateTriple,
    /// The binding side.
    pub selected: RateSource,
    /// True when the pay period is too short for pay history to be used.
    ///
    /// The primary rate is always an estimate regardless of this flag; an
    /// actual OWP/RDP from historical payslips is not computed.
    pub used_estimate: bool,
    /// Length of the pay period in weeks, rounded up.
    pub weeks_in_period: i64,
}

impl ComparisonResult {
    /// The binding rate.
    pub fn selected_rate(&self) -> &RateTriple {
        match self.selected {
            RateSource::Primary => &self.primary,
            RateSource::Secondary => &self.secondary,
        }
    }

    /// Label of the binding rate.
    pub fn selected_label(&self) -> EstimatorLabel {
        match self.selected {
            RateSource::Primary => self.kind.primary_label(),
            RateSource::Secondary => self.kind.secondary_label(),
        }
    }

    /// The higher of the two hourly rates.
    pub fn required_hourly_rate(&self) -> Decimal {
        self.primary.hourly.max(self.secondary.hourly)
    }
}

/// A named hourly rate shown in the rate summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRate {
    /// Display label, e.g. "Worked Time Rate".
    pub label: String,
    /// Hourly rate.
    pub hourly: Decimal,
}

/// Side-by-side summary of the employee's hourly rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSummary {
    /// The non-zero rates, in display order.
    pub rates: Vec<NamedRate>,
    /// Highest rate, if any.
    pub highest: Option<Decimal>,
    /// Lowest rate, if any.
    pub lowest: Option<Decimal>,
    /// `(highest - lowest) / lowest * 100`, if there are any rates.
    pub difference_percent: Option<Decimal>,
    /// True when `difference_percent` exceeds the configured threshold.
    pub significant_difference: bool,
    /// True when no employment start date was given, so the year-to-date
    /// average may include weeks before the employee started.
    pub suggest_start_date: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn comparison(primary: &str, secondary: &str, selected: RateSource) -> ComparisonResult {
        let pattern = WorkPattern::default();
        ComparisonResult {
            kind: ComparisonKind::HolidayPay,
            primary: RateTriple::from_hourly(dec(primary), &pattern),
            secondary: RateTriple::from_hourly(dec(secondary), &pattern),
            selected,
            used_estimate: true,
            weeks_in_period: 2,
        }
    }

    #[test]
    fn test_from_hourly_derives_daily_and_weekly() {
        let pattern = WorkPattern::new(dec("7.5"), dec("4")).unwrap();
        let rate = RateTriple::from_hourly(dec("30"), &pattern);
        assert_eq!(rate.daily, dec("225"));
        assert_eq!(rate.weekly, dec("900"));
    }

    #[test]
    fn test_from_weekly_derives_hourly_and_daily() {
        let rate = RateTriple::from_weekly(dec("1000"), &WorkPattern::default());
        assert_eq!(rate.hourly, dec("25"));
        assert_eq!(rate.daily, dec("200"));
    }

    #[test]
    fn test_triple_saturates_out_of_range() {
        let rate = RateTriple::from_hourly(Decimal::MAX, &WorkPattern::default());
        assert_eq!(rate.daily, Decimal::MAX);
        assert_eq!(rate.weekly, Decimal::MAX);

        let tiny = WorkPattern {
            hours_per_day: dec("0.0000000000000000000001"),
            days_per_week: dec("0.0000001"),
        };
        let rate = RateTriple::from_weekly(Decimal::MAX, &tiny);
        assert_eq!(rate.hourly, Decimal::MAX);
        assert_eq!(rate.daily, Decimal::MAX);
    }

    #[test]
    fn test_zero_triple() {
        assert!(RateTriple::zero().is_zero());
        assert_eq!(RateTriple::zero().weekly, Decimal::ZERO);
    }

    #[test]
    fn test_selected_rate_and_label_follow_selection() {
        let result = comparison("20", "25", RateSource::Secondary);
        assert_eq!(result.selected_rate().hourly, dec("25"));
        assert_eq!(result.selected_label(), EstimatorLabel::Awe);

        let result = comparison("25", "20", RateSource::Primary);
        assert_eq!(result.selected_label(), EstimatorLabel::Owp);
    }

    #[test]
    fn test_baps_labels() {
        assert_eq!(ComparisonKind::BapsLeave.primary_label(), EstimatorLabel::Rdp);
        assert_eq!(
            ComparisonKind::BapsLeave.secondary_label(),
            EstimatorLabel::Adp
        );
    }

    #[test]
    fn test_required_hourly_rate_is_the_greater() {
        let result = comparison("20", "25", RateSource::Secondary);
        assert_eq!(result.required_hourly_rate(), dec("25"));
    }

    #[test]
    fn test_estimator_label_serialization() {
        assert_eq!(serde_json::to_string(&EstimatorLabel::Owp).unwrap(), "\"OWP\"");
        assert_eq!(serde_json::to_string(&EstimatorLabel::Adp).unwrap(), "\"ADP\"");
        assert_eq!(EstimatorLabel::Rdp.to_string(), "RDP");
    }
}
