//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type, used to decide whether a
//! payslip covers enough time for pay history to stand in for an estimate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a pay period with its date range.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.weeks_spanned(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidPayPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    end_date, start_date
                ),
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Number of weeks the period spans, rounded up, never less than one.
    pub fn weeks_spanned(&self) -> i64 {
        weeks_between(self.start_date, self.end_date)
    }
}

/// Whole weeks from `start` to `end`, rounded up, with a floor of one.
///
/// Used both for pay period length and for the averaging window of the
/// year-to-date estimators.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days();
    if days <= 0 {
        return 1;
    }
    ((days + 6) / 7).max(1)
}
