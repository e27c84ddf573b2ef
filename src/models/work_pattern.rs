//! Work pattern model and time units.
//!
//! A [`WorkPattern`] is the employee's usual hours per day and days per week.
//! Every conversion between hours, days and weeks in the engine goes through it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hours per day assumed when none (or an invalid value) is supplied.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Days per week assumed when none (or an invalid value) is supplied.
pub const DEFAULT_DAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Upper bound on hours per day.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Upper bound on days per week.
pub const MAX_DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// The unit a quantity of time is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Hours.
    #[default]
    Hours,
    /// Working days of the employee's work pattern.
    Days,
    /// Working weeks of the employee's work pattern.
    Weeks,
}

/// The employee's usual working pattern.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::WorkPattern;
/// use rust_decimal::Decimal;
///
/// let pattern = WorkPattern::new(Decimal::from(8), Decimal::from(5)).unwrap();
/// assert_eq!(pattern.hours_per_week(), Decimal::from(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPattern {
    /// Usual hours worked per day, in `(0, 24]`.
    pub hours_per_day: Decimal,
    /// Usual days worked per week, in `(0, 7]`.
    pub days_per_week: Decimal,
}

impl WorkPattern {
    /// Creates a work pattern, rejecting values outside their permitted range.
    pub fn new(hours_per_day: Decimal, days_per_week: Decimal) -> EngineResult<Self> {
        if !valid_hours_per_day(hours_per_day) {
            return Err(EngineError::InvalidWorkPattern {
                field: "hours_per_day".to_string(),
                message: format!("{} is not in the range (0, 24]", hours_per_day),
            });
        }
        if !valid_days_per_week(days_per_week) {
            return Err(EngineError::InvalidWorkPattern {
                field: "days_per_week".to_string(),
                message: format!("{} is not in the range (0, 7]", days_per_week),
            });
        }

        Ok(Self {
            hours_per_day,
            days_per_week,
        })
    }

    /// Returns true if both fields are within range.
    pub fn is_valid(&self) -> bool {
        valid_hours_per_day(self.hours_per_day) && valid_days_per_week(self.days_per_week)
    }

    /// Replaces each out-of-range field with its default.
    pub fn normalized(self) -> Self {
        self.normalized_with(&Self::default())
    }

    /// Replaces each out-of-range field with the matching field of `fallback`.
    pub fn normalized_with(self, fallback: &WorkPattern) -> Self {
        Self {
            hours_per_day: if valid_hours_per_day(self.hours_per_day) {
                self.hours_per_day
            } else {
                fallback.hours_per_day
            },
            days_per_week: if valid_days_per_week(self.days_per_week) {
                self.days_per_week
            } else {
                fallback.days_per_week
            },
        }
    }

    /// Hours in one working week of this pattern.
    pub fn hours_per_week(&self) -> Decimal {
        self.hours_per_day * self.days_per_week
    }
}

impl Default for WorkPattern {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
        }
    }
}

fn valid_hours_per_day(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= MAX_HOURS_PER_DAY
}

fn valid_days_per_week(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= MAX_DAYS_PER_WEEK
}
