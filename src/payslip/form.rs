//! The payslip entry form.
//!
//! Every field of the form is free text, possibly half-typed. Parsing here is
//! lenient: empty, malformed or negative numbers become zero and unknown
//! units become hours, so that a form is always convertible to a
//! [`PayslipData`]. The JSON shape itself is strict: a field holding an
//! array, an object or a boolean where text belongs is a deserialize error.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::models::{
    BapsLeave, EmploymentConditions, HolidayPay, OrdinaryPay, PayBasis, PayEntry, PayslipData,
    PayslipPeriod, TimeUnit, WorkPattern, WorkedTime, YearToDateEarnings,
};

/// Largest amount read from a form field. Larger figures are read as zero.
///
/// No payslip figure comes near a trillion, and the bound keeps products of
/// two form figures well inside `Decimal`'s range.
pub const MAX_FORM_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Parses a money or quantity field.
///
/// Accepts a leading `$`, thousands separators and surrounding whitespace.
/// Anything that does not parse, any negative value and anything above
/// [`MAX_FORM_AMOUNT`] is zero.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::payslip::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("$1,234.50"), Decimal::new(123450, 2));
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("12.5.3"), Decimal::ZERO);
/// assert_eq!(parse_amount("-40"), Decimal::ZERO);
/// assert_eq!(parse_amount("79228162514264337593543950335"), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
        .filter(|value| *value <= MAX_FORM_AMOUNT)
        .map(|value| value.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a time unit, defaulting to hours.
pub fn parse_unit(text: &str) -> TimeUnit {
    match text.trim().to_ascii_lowercase().as_str() {
        "days" | "day" | "d" => TimeUnit::Days,
        "weeks" | "week" | "w" | "wk" | "wks" => TimeUnit::Weeks,
        _ => TimeUnit::Hours,
    }
}

/// Parses a date as written on a payslip.
///
/// Accepts ISO `YYYY-MM-DD` and New Zealand day-first dates separated by
/// `/`, `-` or `.`, with two- or four-digit years. Two-digit years are in
/// the 2000s.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::payslip::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 6, 2);
/// assert_eq!(parse_date("2025-06-02"), expected);
/// assert_eq!(parse_date("02/06/2025"), expected);
/// assert_eq!(parse_date("2-6-25"), expected);
/// assert_eq!(parse_date("June 2"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.trim().split(['/', '-', '.']).collect();
    let [first, month, last] = parts.as_slice() else {
        return None;
    };

    let (year, day) = if first.len() == 4 {
        (*first, *last)
    } else {
        (*last, *first)
    };

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

pub(super) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A text field: a string, a number rendered as text, or null for empty.
fn form_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            kind_of(&other)
        ))),
    }
}

/// A nested section; null means empty.
fn form_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn form_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Total as entered, or quantity times rate when no total was entered.
fn entry_total(quantity: Decimal, rate: Decimal, total: &str) -> Decimal {
    let total = parse_amount(total);
    if total.is_zero() {
        quantity.checked_mul(rate).unwrap_or(Decimal::ZERO)
    } else {
        total
    }
}

/// Pay period dates as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayPeriodForm {
    /// First day of the period.
    #[serde(deserialize_with = "form_text")]
    pub start_date: String,
    /// Last day of the period.
    #[serde(deserialize_with = "form_text")]
    pub end_date: String,
}

/// A worked time line: hours, rate and total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkedItemForm {
    /// Hours worked.
    #[serde(deserialize_with = "form_text")]
    pub hours: String,
    /// Rate per hour.
    #[serde(deserialize_with = "form_text")]
    pub rate: String,
    /// Amount paid.
    #[serde(deserialize_with = "form_text")]
    pub total: String,
}

impl WorkedItemForm {
    fn to_entry(&self) -> PayEntry {
        let quantity = parse_amount(&self.hours);
        let rate_per_unit = parse_amount(&self.rate);
        PayEntry {
            quantity,
            unit: TimeUnit::Hours,
            rate_per_unit,
            total: entry_total(quantity, rate_per_unit, &self.total),
        }
    }
}

/// A leave line. Older forms name the fields `amount` and `unitType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveItemForm {
    /// Time taken, in `unit`s.
    #[serde(alias = "amount", deserialize_with = "form_text")]
    pub time: String,
    /// Rate per unit.
    #[serde(deserialize_with = "form_text")]
    pub rate: String,
    /// `hours`, `days` or `weeks`.
    #[serde(alias = "unitType", deserialize_with = "form_text")]
    pub unit: String,
    /// Amount paid.
    #[serde(deserialize_with = "form_text")]
    pub total: String,
}

impl LeaveItemForm {
    fn to_entry(&self) -> PayEntry {
        let quantity = parse_amount(&self.time);
        let rate_per_unit = parse_amount(&self.rate);
        PayEntry {
            quantity,
            unit: parse_unit(&self.unit),
            rate_per_unit,
            total: entry_total(quantity, rate_per_unit, &self.total),
        }
    }
}

/// Worked time section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkedTimeForm {
    /// Ordinary hours.
    #[serde(deserialize_with = "form_section")]
    pub worked_time: WorkedItemForm,
    /// Overtime.
    #[serde(deserialize_with = "form_section")]
    pub overtime: WorkedItemForm,
    /// Other worked time.
    #[serde(deserialize_with = "form_section")]
    pub other: WorkedItemForm,
}

/// BAPS leave section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BapsLeaveForm {
    /// Sick leave.
    #[serde(deserialize_with = "form_section")]
    pub sick_leave: LeaveItemForm,
    /// Public holidays.
    #[serde(deserialize_with = "form_section")]
    pub public_holidays: LeaveItemForm,
    /// Other BAPS leave.
    #[serde(deserialize_with = "form_section")]
    pub other: LeaveItemForm,
}

/// Holiday pay section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HolidayPayForm {
    /// Annual leave.
    #[serde(deserialize_with = "form_section")]
    pub annual_leave: LeaveItemForm,
    /// Other holiday pay.
    #[serde(deserialize_with = "form_section")]
    pub other: LeaveItemForm,
}

/// Year-to-date earnings section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YtdEarningsForm {
    /// Gross total.
    #[serde(deserialize_with = "form_text")]
    pub total: String,
}

/// Ordinary pay as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdinaryPayForm {
    /// Amount per hour or per year.
    #[serde(deserialize_with = "form_text")]
    pub amount: String,
    /// `hourly` or `annual`.
    #[serde(rename = "type", deserialize_with = "form_text")]
    pub basis: String,
    /// A starting-out or training rate is being paid.
    #[serde(deserialize_with = "form_flag")]
    pub allow_below_minimum: bool,
}

impl OrdinaryPayForm {
    /// `None` when no amount was entered.
    fn to_ordinary_pay(&self) -> Option<OrdinaryPay> {
        let amount = parse_amount(&self.amount);
        if amount.is_zero() {
            return None;
        }

        let basis = if self.basis.trim().eq_ignore_ascii_case("annual") {
            PayBasis::Annual
        } else {
            PayBasis::Hourly
        };

        Some(OrdinaryPay {
            amount,
            basis,
            allow_below_minimum: self.allow_below_minimum,
        })
    }
}

/// Employment conditions section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentConditionsForm {
    /// Usual hours per day.
    #[serde(deserialize_with = "form_text")]
    pub hours_per_day: String,
    /// Usual days per week.
    #[serde(deserialize_with = "form_text")]
    pub days_per_week: String,
    /// Date employment began.
    #[serde(deserialize_with = "form_text")]
    pub start_date: String,
    /// Contracted ordinary pay.
    #[serde(deserialize_with = "form_section")]
    pub ordinary_pay: OrdinaryPayForm,
}

/// The whole payslip form.
///
/// # Example
///
/// ```
/// use nz_leave_pay::models::{PayslipData, TimeUnit};
/// use nz_leave_pay::payslip::PayslipForm;
/// use rust_decimal::Decimal;
///
/// let form: PayslipForm = serde_json::from_str(r#"{
///     "holidayPay": { "annualLeave": { "time": "2", "rate": "200", "unit": "days" } }
/// }"#).unwrap();
///
/// let data = PayslipData::from(form);
/// assert_eq!(data.holiday_pay.annual_leave.unit, TimeUnit::Days);
/// assert_eq!(data.holiday_pay.annual_leave.total, Decimal::from(400));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayslipForm {
    /// Pay period.
    #[serde(deserialize_with = "form_section")]
    pub pay_period: PayPeriodForm,
    /// Worked time.
    #[serde(deserialize_with = "form_section")]
    pub worked_time: WorkedTimeForm,
    /// BAPS leave.
    #[serde(deserialize_with = "form_section")]
    pub baps_leave: BapsLeaveForm,
    /// Holiday pay.
    #[serde(deserialize_with = "form_section")]
    pub holiday_pay: HolidayPayForm,
    /// Year-to-date earnings.
    #[serde(deserialize_with = "form_section")]
    pub ytd_earnings: YtdEarningsForm,
    /// Employment conditions.
    #[serde(deserialize_with = "form_section")]
    pub employment_conditions: EmploymentConditionsForm,
}

impl From<&PayslipForm> for PayslipData {
    fn from(form: &PayslipForm) -> Self {
        let conditions = &form.employment_conditions;

        PayslipData {
            pay_period: PayslipPeriod {
                start_date: parse_date(&form.pay_period.start_date),
                end_date: parse_date(&form.pay_period.end_date),
            },
            worked_time: WorkedTime {
                worked_time: form.worked_time.worked_time.to_entry(),
                overtime: form.worked_time.overtime.to_entry(),
                other: form.worked_time.other.to_entry(),
            },
            baps_leave: BapsLeave {
                sick_leave: form.baps_leave.sick_leave.to_entry(),
                public_holidays: form.baps_leave.public_holidays.to_entry(),
                other: form.baps_leave.other.to_entry(),
            },
            holiday_pay: HolidayPay {
                annual_leave: form.holiday_pay.annual_leave.to_entry(),
                other: form.holiday_pay.other.to_entry(),
            },
            ytd_earnings: YearToDateEarnings {
                total: parse_amount(&form.ytd_earnings.total),
            },
            employment_conditions: EmploymentConditions {
                work_pattern: WorkPattern {
                    hours_per_day: parse_amount(&conditions.hours_per_day),
                    days_per_week: parse_amount(&conditions.days_per_week),
                }
                .normalized(),
                start_date: parse_date(&conditions.start_date),
                ordinary_pay: conditions.ordinary_pay.to_ordinary_pay(),
            },
        }
    }
}

impl From<PayslipForm> for PayslipData {
    fn from(form: PayslipForm) -> Self {
        PayslipData::from(&form)
    }
}
