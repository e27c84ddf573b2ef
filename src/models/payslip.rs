//! Canonical payslip shape.
//!
//! Both the form adapter and the extraction normalizer produce a
//! [`PayslipData`]; the analysis pipeline only ever sees this shape.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LeaveCategory, OrdinaryPay, PayEntry, WorkPattern};

/// Pay period dates as they appear on a payslip; either may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayslipPeriod {
    /// First day of the pay period.
    pub start_date: Option<NaiveDate>,
    /// Last day of the pay period.
    pub end_date: Option<NaiveDate>,
}

/// Worked time lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkedTime {
    /// Ordinary hours worked.
    pub worked_time: PayEntry,
    /// Overtime.
    pub overtime: PayEntry,
    /// Any other worked time.
    pub other: PayEntry,
}

/// BAPS leave lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BapsLeave {
    /// Sick leave.
    pub sick_leave: PayEntry,
    /// Public holidays.
    pub public_holidays: PayEntry,
    /// Bereavement, alternative holidays and similar.
    pub other: PayEntry,
}

/// Holiday pay lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HolidayPay {
    /// Annual leave.
    pub annual_leave: PayEntry,
    /// Other holiday payments.
    pub other: PayEntry,
}

/// Gross earnings since the start of the tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearToDateEarnings {
    /// Gross total.
    pub total: Decimal,
}

/// The employee's conditions of employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmploymentConditions {
    /// Usual hours per day and days per week.
    pub work_pattern: WorkPattern,
    /// Date employment began, if known.
    pub start_date: Option<NaiveDate>,
    /// Contracted base rate, if known.
    pub ordinary_pay: Option<OrdinaryPay>,
}

/// Everything the engine needs from one payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayslipData {
    /// Pay period dates.
    pub pay_period: PayslipPeriod,
    /// Worked time lines.
    pub worked_time: WorkedTime,
    /// BAPS leave lines.
    pub baps_leave: BapsLeave,
    /// Holiday pay lines.
    pub holiday_pay: HolidayPay,
    /// Year-to-date earnings.
    pub ytd_earnings: YearToDateEarnings,
    /// Employment conditions.
    pub employment_conditions: EmploymentConditions,
}

impl PayslipData {
    /// Every leave line with its category, BAPS leave first.
    pub fn leave_entries(&self) -> [(LeaveCategory, &PayEntry); 5] {
        [
            (LeaveCategory::SickLeave, &self.baps_leave.sick_leave),
            (LeaveCategory::PublicHolidays, &self.baps_leave.public_holidays),
            (LeaveCategory::OtherBaps, &self.baps_leave.other),
            (LeaveCategory::AnnualLeave, &self.holiday_pay.annual_leave),
            (LeaveCategory::OtherHoliday, &self.holiday_pay.other),
        ]
    }

    /// Returns true if any worked time or leave line is active.
    pub fn has_any_payment(&self) -> bool {
        let worked = [
            &self.worked_time.worked_time,
            &self.worked_time.overtime,
            &self.worked_time.other,
        ];
        worked.iter().any(|e| e.is_active())
            || self.leave_entries().iter().any(|(_, e)| e.is_active())
    }
}
