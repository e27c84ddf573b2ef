//! Time unit normalization.
//!
//! Converts quantities of hours, days or weeks into hours using the
//! employee's work pattern, so that every rate can be compared per hour.

use rust_decimal::Decimal;

use crate::models::{PayEntry, TimeUnit, WorkPattern};

/// Converts a quantity of time into hours.
///
/// Negative quantities are treated as zero; partially entered form values
/// must never make the calculation fail. A quantity too large to express in
/// hours is also treated as zero; [`checked_to_hours`] tells the two apart.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::calculation::to_hours;
/// use nz_leave_pay::models::{TimeUnit, WorkPattern};
/// use rust_decimal::Decimal;
///
/// let pattern = WorkPattern::default();
/// assert_eq!(to_hours(Decimal::from(2), TimeUnit::Days, &pattern), Decimal::from(16));
/// assert_eq!(to_hours(Decimal::from(1), TimeUnit::Weeks, &pattern), Decimal::from(40));
/// assert_eq!(to_hours(Decimal::from(-3), TimeUnit::Hours, &pattern), Decimal::ZERO);
/// ```
pub fn to_hours(quantity: Decimal, unit: TimeUnit, pattern: &WorkPattern) -> Decimal {
    checked_to_hours(quantity, unit, pattern).unwrap_or(Decimal::ZERO)
}

/// Converts a quantity of time into hours, or `None` if the result is out
/// of `Decimal` range.
pub fn checked_to_hours(quantity: Decimal, unit: TimeUnit, pattern: &WorkPattern) -> Option<Decimal> {
    let pattern = guard_pattern(pattern);
    let quantity = quantity.max(Decimal::ZERO);

    match unit {
        TimeUnit::Hours => Some(quantity),
        TimeUnit::Days => quantity.checked_mul(pattern.hours_per_day),
        TimeUnit::Weeks => quantity.checked_mul(pattern.hours_per_week()),
    }
}

/// Hours equivalent of a pay entry's quantity.
pub fn entry_hours(entry: &PayEntry, pattern: &WorkPattern) -> Decimal {
    to_hours(entry.quantity, entry.unit, pattern)
}

/// Hours equivalent of a pay entry's quantity, or `None` on overflow.
pub fn checked_entry_hours(entry: &PayEntry, pattern: &WorkPattern) -> Option<Decimal> {
    checked_to_hours(entry.quantity, entry.unit, pattern)
}

/// An out-of-range work pattern is a caller bug: debug builds stop on it,
/// release builds fall back to the defaults for the offending fields.
pub(crate) fn guard_pattern(pattern: &WorkPattern) -> WorkPattern {
    debug_assert!(
        pattern.is_valid(),
        "work pattern out of range: {:?}",
        pattern
    );
    pattern.normalized()
}
