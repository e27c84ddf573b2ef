//! Payslip input adapters.
//!
//! Two sources produce a [`PayslipData`](crate::models::PayslipData): the
//! hand-filled form, deserialized as a [`PayslipForm`], and replies from a
//! payslip-reading vision model, deserialized into the same form by
//! [`normalize_extraction`] with the offending field named on error.

mod extraction;
mod form;

pub use extraction::normalize_extraction;
pub use form::{
    BapsLeaveForm, EmploymentConditionsForm, HolidayPayForm, LeaveItemForm, OrdinaryPayForm,
    PayPeriodForm, PayslipForm, WorkedItemForm, WorkedTimeForm, YtdEarningsForm, parse_amount,
    parse_date, parse_unit,
};
