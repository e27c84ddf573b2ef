//! End-to-end analysis of one payslip.
//!
//! [`analyse_payslip`] runs every step of the engine in order and records each
//! decision in an audit trace:
//!
//! 1. pay period and work pattern validation
//! 2. minimum wage check of ordinary pay
//! 3. worked-time and year-to-date hourly rates
//! 4. OWP vs AWE and RDP vs ADP comparisons
//! 5. a compliance check for every paid leave line
//! 6. the rate summary

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnalysisTotals, AuditStep, AuditTrace, AuditWarning, ComparisonKind, ComparisonResult,
    ComplianceStatus, EntryAnalysis, MinimumWageCheck, PayAnalysisReport, PayPeriod, PayslipData,
    PayslipPeriod, RateSummary, RateTriple,
};

use super::comparison::{ComparisonInputs, select_leave_comparison};
use super::compliance::check_compliance;
use super::rate_deriver::{check_minimum_wage, hourly_rate_of};
use super::rate_summary::summarize_rates;
use super::worked_rate::{worked_hourly_rate, ytd_hourly_rate};

/// Warning raised when ordinary pay is below the adult minimum wage.
pub const WARNING_BELOW_MINIMUM_WAGE: &str = "BELOW_MINIMUM_WAGE";
/// Warning raised when no minimum wage schedule covers the pay period.
pub const WARNING_MINIMUM_WAGE_UNKNOWN: &str = "MINIMUM_WAGE_UNKNOWN";
/// Warning raised when the supplied work pattern had to be replaced.
pub const WARNING_WORK_PATTERN_DEFAULTED: &str = "WORK_PATTERN_DEFAULTED";
/// Warning raised when worked time was paid below the ordinary rate.
pub const WARNING_WORKED_RATE_BELOW_ORDINARY: &str = "WORKED_RATE_BELOW_ORDINARY";
/// Warning raised when the payslip's hourly rates differ significantly.
pub const WARNING_SIGNIFICANT_RATE_DIFFERENCE: &str = "SIGNIFICANT_RATE_DIFFERENCE";
/// Warning raised when the pay period is too short for pay history to count.
pub const WARNING_SHORT_PAY_HISTORY: &str = "SHORT_PAY_HISTORY";
/// Warning raised for a leave line paid without any time; the line is not checked.
pub const WARNING_PAYMENT_WITHOUT_TIME: &str = "PAYMENT_WITHOUT_TIME";
/// Warning raised for a leave line whose time and payment cannot be rated per hour.
pub const WARNING_ENTRY_NOT_COMPUTABLE: &str = "ENTRY_NOT_COMPUTABLE";
/// Warning raised when there is no rate to compare a leave line against.
pub const WARNING_INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
/// Warning raised for each underpaid leave line.
pub const WARNING_LEAVE_UNDERPAID: &str = "LEAVE_UNDERPAID";

const STATUTE_OWP_AWE: &str = "Holidays Act 2003 s8, s21(2)";
const STATUTE_RDP_ADP: &str = "Holidays Act 2003 s9, s9A";
const STATUTE_MINIMUM_WAGE: &str = "Minimum Wage Act 1983 s6";
const STATUTE_DEFINITIONS: &str = "Holidays Act 2003 s5";

/// Collects audit steps and warnings, numbering steps as they are added.
#[derive(Debug, Default)]
struct TraceBuilder {
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl TraceBuilder {
    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        statute_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            statute_ref: statute_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.warnings.push(AuditWarning::new(code, message, severity));
    }

    fn finish(self, started: Instant) -> AuditTrace {
        AuditTrace {
            steps: self.steps,
            warnings: self.warnings,
            duration_us: started.elapsed().as_micros() as u64,
        }
    }
}

fn fmt(value: Decimal) -> String {
    value.round_dp(6).normalize().to_string()
}

/// Analyses a payslip, checking every paid leave line against the statutory
/// comparison rates.
///
/// `today` is the date the year-to-date averages are measured to. Nothing in
/// the analysis reads the clock apart from the report timestamp and duration.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayPeriod`] if either pay period date is
/// missing or the end date precedes the start date.
///
/// # Examples
///
/// ```no_run
/// use nz_leave_pay::calculation::analyse_payslip;
/// use nz_leave_pay::config::ConfigLoader;
/// use nz_leave_pay::models::{PayEntry, PayslipData, TimeUnit};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/nz").unwrap();
/// let mut payslip = PayslipData::default();
/// payslip.pay_period.start_date = NaiveDate::from_ymd_opt(2025, 6, 2);
/// payslip.pay_period.end_date = NaiveDate::from_ymd_opt(2025, 6, 15);
/// payslip.worked_time.worked_time =
///     PayEntry::priced(Decimal::from(72), TimeUnit::Hours, Decimal::from(25));
/// payslip.holiday_pay.annual_leave =
///     PayEntry::priced(Decimal::from(8), TimeUnit::Hours, Decimal::from(25));
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
/// let report = analyse_payslip(&payslip, &loader, today).unwrap();
/// assert_eq!(report.totals.entries_non_compliant, 0);
/// ```
pub fn analyse_payslip(
    data: &PayslipData,
    loader: &ConfigLoader,
    today: NaiveDate,
) -> EngineResult<PayAnalysisReport> {
    let started = Instant::now();
    let config = loader.config();
    let settings = config.compliance();
    let conditions = &data.employment_conditions;
    let mut trace = TraceBuilder::default();

    // Step 1: pay period and work pattern
    let pay_period = resolve_pay_period(&data.pay_period)?;

    let supplied = conditions.work_pattern;
    let pattern = supplied.normalized_with(&config.defaults().work_pattern());
    if pattern != supplied {
        trace.warn(
            WARNING_WORK_PATTERN_DEFAULTED,
            format!(
                "Work pattern of {} hours x {} days is out of range; using {} hours x {} days",
                supplied.hours_per_day,
                supplied.days_per_week,
                pattern.hours_per_day,
                pattern.days_per_week
            ),
            "medium",
        );
    }
    trace.step(
        "work_pattern",
        "Work Pattern",
        STATUTE_DEFINITIONS,
        serde_json::json!({
            "hours_per_day": fmt(supplied.hours_per_day),
            "days_per_week": fmt(supplied.days_per_week),
        }),
        serde_json::json!({
            "hours_per_day": fmt(pattern.hours_per_day),
            "days_per_week": fmt(pattern.days_per_week),
            "hours_per_week": fmt(pattern.hours_per_week()),
        }),
        format!(
            "Pay period {} to {} ({} weeks); {} hours per week",
            pay_period.start_date,
            pay_period.end_date,
            pay_period.weeks_spanned(),
            fmt(pattern.hours_per_week())
        ),
    );

    // Step 2: minimum wage
    let minimum_wage = match conditions.ordinary_pay.as_ref() {
        Some(ordinary_pay) => match loader.minimum_wage(pay_period.end_date) {
            Ok(schedule) => {
                let check = check_minimum_wage(ordinary_pay, &pattern, schedule.adult);
                record_minimum_wage(&mut trace, &check, schedule.effective_date);
                Some(check)
            }
            Err(EngineError::MinimumWageNotFound { date }) => {
                trace.warn(
                    WARNING_MINIMUM_WAGE_UNKNOWN,
                    format!("No minimum wage rate is configured for {}", date),
                    "low",
                );
                None
            }
            Err(err) => return Err(err),
        },
        None => None,
    };

    // Step 3: hourly rates from the payslip
    let ordinary_hourly_rate = conditions
        .ordinary_pay
        .as_ref()
        .map(|pay| hourly_rate_of(pay, &pattern))
        .unwrap_or(Decimal::ZERO);
    let worked_rate = worked_hourly_rate(&data.worked_time.worked_time, &pattern);
    let ytd_rate = ytd_hourly_rate(data.ytd_earnings.total, &pattern);

    trace.step(
        "worked_time_rate",
        "Worked Time Rate",
        STATUTE_DEFINITIONS,
        serde_json::json!({
            "quantity": fmt(data.worked_time.worked_time.quantity),
            "unit": data.worked_time.worked_time.unit,
            "total": fmt(data.worked_time.worked_time.total),
            "ytd_total": fmt(data.ytd_earnings.total),
        }),
        serde_json::json!({
            "worked_hourly_rate": fmt(worked_rate),
            "ytd_hourly_rate": fmt(ytd_rate),
            "ordinary_hourly_rate": fmt(ordinary_hourly_rate),
        }),
        format!(
            "Worked time paid at ${}/h; year to date averages ${}/h",
            worked_rate.round_dp(2),
            ytd_rate.round_dp(2)
        ),
    );

    if worked_rate > Decimal::ZERO
        && ordinary_hourly_rate > Decimal::ZERO
        && worked_rate
            .checked_add(settings.tolerance)
            .is_some_and(|rate| rate < ordinary_hourly_rate)
    {
        trace.warn(
            WARNING_WORKED_RATE_BELOW_ORDINARY,
            format!(
                "Worked time was paid at ${}/h, below the ordinary rate of ${}/h",
                worked_rate.round_dp(2),
                ordinary_hourly_rate.round_dp(2)
            ),
            "medium",
        );
    }

    // Step 4: statutory comparisons
    let inputs = ComparisonInputs {
        pattern,
        pay_period,
        ytd_total: data.ytd_earnings.total,
        ordinary_pay: conditions.ordinary_pay,
        employment_start: conditions.start_date,
        worked_hourly_rate: worked_rate,
        today,
        sufficient_history_weeks: settings.sufficient_history_weeks,
    };
    let holiday_comparison = select_leave_comparison(&inputs, ComparisonKind::HolidayPay);
    let baps_comparison = select_leave_comparison(&inputs, ComparisonKind::BapsLeave);

    record_comparison(&mut trace, &holiday_comparison);
    record_comparison(&mut trace, &baps_comparison);

    if holiday_comparison.used_estimate {
        trace.warn(
            WARNING_SHORT_PAY_HISTORY,
            format!(
                "The pay period covers {} week(s), fewer than {}; OWP and RDP are estimated \
                 from current rates rather than pay history",
                holiday_comparison.weeks_in_period, settings.sufficient_history_weeks
            ),
            "low",
        );
    }

    // Step 5: every active leave line
    let mut entries = Vec::new();
    for (category, entry) in data.leave_entries() {
        if !entry.is_active() {
            if entry.is_paid() {
                trace.warn(
                    WARNING_PAYMENT_WITHOUT_TIME,
                    format!(
                        "{} shows a payment of ${} but no time taken, so it was not checked",
                        category.label(),
                        entry.total.round_dp(2)
                    ),
                    "medium",
                );
            }
            continue;
        }

        let comparison = match category.comparison_kind() {
            ComparisonKind::HolidayPay => &holiday_comparison,
            ComparisonKind::BapsLeave => &baps_comparison,
        };
        let check = check_compliance(entry, comparison, &pattern, settings.tolerance);

        debug!(
            category = category.label(),
            status = ?check.status,
            shortfall = %check.shortfall,
            "Leave line checked"
        );

        let paid_rate = check
            .paid_hourly_rate
            .map(|rate| format!("${}/h", rate.round_dp(2)))
            .unwrap_or_else(|| "no hourly rate".to_string());
        let reasoning = match check.status {
            ComplianceStatus::Compliant => format!(
                "{} paid at {}, at least the required ${}/h ({})",
                category.label(),
                paid_rate,
                check.required_hourly_rate.round_dp(2),
                comparison.selected_label()
            ),
            ComplianceStatus::NonCompliant => {
                trace.warn(
                    WARNING_LEAVE_UNDERPAID,
                    format!(
                        "{} appears underpaid by ${}",
                        category.label(),
                        check.shortfall.round_dp(2)
                    ),
                    "high",
                );
                format!(
                    "{} paid at {}, below the required ${}/h ({}); shortfall ${}",
                    category.label(),
                    paid_rate,
                    check.required_hourly_rate.round_dp(2),
                    comparison.selected_label(),
                    check.shortfall.round_dp(2)
                )
            }
            ComplianceStatus::NotComputable => {
                let message = format!(
                    "{} figures are too large or too small to rate per hour",
                    category.label()
                );
                trace.warn(WARNING_ENTRY_NOT_COMPUTABLE, message.clone(), "medium");
                message
            }
            ComplianceStatus::InsufficientData => {
                trace.warn(
                    WARNING_INSUFFICIENT_DATA,
                    format!(
                        "{} cannot be checked: add worked time, year-to-date earnings or \
                         ordinary pay",
                        category.label()
                    ),
                    "medium",
                );
                format!(
                    "Both {} and {} are zero for {}",
                    comparison.kind.primary_label(),
                    comparison.kind.secondary_label(),
                    category.label()
                )
            }
        };

        trace.step(
            "leave_compliance",
            "Leave Payment Compliance",
            match comparison.kind {
                ComparisonKind::HolidayPay => STATUTE_OWP_AWE,
                ComparisonKind::BapsLeave => STATUTE_RDP_ADP,
            },
            serde_json::json!({
                "category": category,
                "quantity": fmt(entry.quantity),
                "unit": entry.unit,
                "total": fmt(entry.total),
            }),
            serde_json::json!({
                "hours_equivalent": fmt(check.hours_equivalent),
                "paid_hourly_rate": check.paid_hourly_rate.map(fmt),
                "required_hourly_rate": fmt(check.required_hourly_rate),
                "status": check.status,
                "shortfall": fmt(check.shortfall),
            }),
            reasoning,
        );

        entries.push(EntryAnalysis {
            category,
            label: category.label().to_string(),
            entry: *entry,
            binding_rate: comparison.selected_label(),
            check,
        });
    }

    // Step 6: rate summary
    let rate_summary = summarize_rates(
        worked_rate,
        ytd_rate,
        ordinary_hourly_rate,
        settings.significant_difference_percent,
        conditions.start_date,
        today,
    );
    record_rate_summary(&mut trace, &rate_summary);

    let totals = AnalysisTotals {
        entries_checked: entries.len() as u32,
        entries_non_compliant: entries
            .iter()
            .filter(|e| e.check.status == ComplianceStatus::NonCompliant)
            .count() as u32,
        total_shortfall: entries
            .iter()
            .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.check.shortfall)),
    };

    Ok(PayAnalysisReport {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        as_of: today,
        pay_period,
        work_pattern: pattern,
        worked_hourly_rate: worked_rate,
        ytd_hourly_rate: ytd_rate,
        minimum_wage,
        holiday_comparison,
        baps_comparison,
        entries,
        rate_summary,
        totals,
        audit_trace: trace.finish(started),
    })
}

/// Both pay period dates are required once a payslip is analysed.
fn resolve_pay_period(period: &PayslipPeriod) -> EngineResult<PayPeriod> {
    let start_date = period.start_date.ok_or_else(|| EngineError::InvalidPayPeriod {
        message: "start date is required".to_string(),
    })?;
    let end_date = period.end_date.ok_or_else(|| EngineError::InvalidPayPeriod {
        message: "end date is required".to_string(),
    })?;

    PayPeriod::new(start_date, end_date)
}

fn record_minimum_wage(trace: &mut TraceBuilder, check: &MinimumWageCheck, effective: NaiveDate) {
    trace.step(
        "minimum_wage",
        "Minimum Wage",
        STATUTE_MINIMUM_WAGE,
        serde_json::json!({
            "hourly_rate": fmt(check.hourly_rate),
            "schedule_effective_date": effective.to_string(),
        }),
        serde_json::json!({
            "minimum_wage": fmt(check.minimum_wage),
            "meets_minimum": check.meets_minimum,
            "waived": check.waived,
        }),
        format!(
            "Ordinary pay of ${}/h against the adult minimum wage of ${}/h",
            check.hourly_rate.round_dp(2),
            check.minimum_wage.round_dp(2)
        ),
    );

    if !check.meets_minimum && !check.waived {
        trace.warn(
            WARNING_BELOW_MINIMUM_WAGE,
            format!(
                "Ordinary pay of ${}/h is below the adult minimum wage of ${}/h",
                check.hourly_rate.round_dp(2),
                check.minimum_wage.round_dp(2)
            ),
            "high",
        );
    }
}

fn record_comparison(trace: &mut TraceBuilder, comparison: &ComparisonResult) {
    let primary = comparison.kind.primary_label();
    let secondary = comparison.kind.secondary_label();
    let (rule_id, rule_name, statute_ref) = match comparison.kind {
        ComparisonKind::HolidayPay => ("holiday_pay_comparison", "OWP vs AWE", STATUTE_OWP_AWE),
        ComparisonKind::BapsLeave => ("baps_leave_comparison", "RDP vs ADP", STATUTE_RDP_ADP),
    };

    trace.step(
        rule_id,
        rule_name,
        statute_ref,
        serde_json::json!({
            "weeks_in_period": comparison.weeks_in_period,
            "used_estimate": comparison.used_estimate,
        }),
        serde_json::json!({
            primary.to_string(): triple_json(&comparison.primary),
            secondary.to_string(): triple_json(&comparison.secondary),
            "selected": comparison.selected_label(),
        }),
        format!(
            "{} ${}/h vs {} ${}/h; the greater, {}, applies",
            primary,
            comparison.primary.hourly.round_dp(2),
            secondary,
            comparison.secondary.hourly.round_dp(2),
            comparison.selected_label()
        ),
    );
}

fn triple_json(rate: &RateTriple) -> serde_json::Value {
    serde_json::json!({
        "hourly": fmt(rate.hourly),
        "daily": fmt(rate.daily),
        "weekly": fmt(rate.weekly),
    })
}

fn record_rate_summary(trace: &mut TraceBuilder, summary: &RateSummary) {
    let rates: Vec<serde_json::Value> = summary
        .rates
        .iter()
        .map(|r| serde_json::json!({ "label": r.label, "hourly": fmt(r.hourly) }))
        .collect();

    trace.step(
        "rate_summary",
        "Rate Summary",
        STATUTE_DEFINITIONS,
        serde_json::json!({ "rates": rates }),
        serde_json::json!({
            "difference_percent": summary.difference_percent.map(fmt),
            "significant_difference": summary.significant_difference,
        }),
        match summary.difference_percent {
            Some(diff) => format!("Highest and lowest rates differ by {}%", diff.round_dp(1)),
            None => "No rates to compare".to_string(),
        },
    );

    if summary.significant_difference {
        let mut message = format!(
            "There is a {}% difference between your highest and lowest rates",
            summary.difference_percent.unwrap_or_default().round_dp(1)
        );
        if summary.suggest_start_date {
            message.push_str(
                "; if you started after April 1, adding your employment start date will make \
                 the year-to-date average more accurate",
            );
        }
        trace.warn(WARNING_SIGNIFICANT_RATE_DIFFERENCE, message, "low");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstimatorLabel, OrdinaryPay, PayEntry, TimeUnit, WorkPattern};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::load("./config/nz").unwrap()
    }

    /// A fortnightly payslip: 72 hours worked at $25 and 8 hours of leave.
    fn payslip() -> PayslipData {
        let mut data = PayslipData::default();
        data.pay_period.start_date = Some(date(2025, 6, 2));
        data.pay_period.end_date = Some(date(2025, 6, 15));
        data.worked_time.worked_time = PayEntry::priced(dec("72"), TimeUnit::Hours, dec("25"));
        data.employment_conditions.ordinary_pay = Some(OrdinaryPay::hourly(dec("25")));
        data
    }

    fn today() -> NaiveDate {
        date(2025, 6, 16)
    }

    #[test]
    fn test_compliant_annual_leave() {
        let mut data = payslip();
        data.holiday_pay.annual_leave = PayEntry::priced(dec("8"), TimeUnit::Hours, dec("25"));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(report.entries.len(), 1);
        let entry = &report.entries[0];
        assert_eq!(entry.label, "Annual Leave");
        assert_eq!(entry.binding_rate, EstimatorLabel::Owp);
        assert!(entry.check.is_compliant());
        assert_eq!(report.totals.entries_checked, 1);
        assert_eq!(report.totals.entries_non_compliant, 0);
        assert_eq!(report.totals.total_shortfall, Decimal::ZERO);
    }

    #[test]
    fn test_underpaid_sick_leave_reports_shortfall() {
        let mut data = payslip();
        data.baps_leave.sick_leave = PayEntry::priced(dec("1"), TimeUnit::Days, dec("180"));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        let entry = &report.entries[0];
        assert_eq!(entry.label, "Sick Leave");
        assert_eq!(entry.binding_rate, EstimatorLabel::Rdp);
        assert_eq!(entry.check.status, ComplianceStatus::NonCompliant);
        // 8 hours at 25 = 200, paid 180
        assert_eq!(entry.check.shortfall, dec("20"));
        assert_eq!(report.totals.total_shortfall, dec("20"));
        assert!(report.audit_trace.has_warning(WARNING_LEAVE_UNDERPAID));
    }

    #[test]
    fn test_ytd_average_binds_when_higher() {
        let mut data = payslip();
        // 11 weeks into the tax year at 1200/week = 30/h
        data.ytd_earnings.total = dec("13200");
        data.holiday_pay.annual_leave = PayEntry::priced(dec("8"), TimeUnit::Hours, dec("25"));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(report.holiday_comparison.secondary.weekly, dec("1200"));
        let entry = &report.entries[0];
        assert_eq!(entry.binding_rate, EstimatorLabel::Awe);
        assert_eq!(entry.check.shortfall, dec("40"));
    }

    #[test]
    fn test_unpaid_lines_are_skipped() {
        let report = analyse_payslip(&payslip(), &loader(), today()).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.totals.entries_checked, 0);
    }

    #[test]
    fn test_payment_without_time_is_warned_not_checked() {
        let mut data = payslip();
        data.holiday_pay.other = PayEntry {
            total: dec("500"),
            ..PayEntry::default()
        };

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert!(report.entries.is_empty());
        assert_eq!(report.totals.entries_checked, 0);
        assert!(report.audit_trace.has_warning(WARNING_PAYMENT_WITHOUT_TIME));
        assert!(!report.audit_trace.has_warning(WARNING_ENTRY_NOT_COMPUTABLE));
    }

    #[test]
    fn test_extreme_leave_figures_do_not_fail_analysis() {
        let mut data = payslip();
        data.holiday_pay.annual_leave = PayEntry {
            quantity: dec("0.0000000000000000000000001"),
            unit: TimeUnit::Hours,
            rate_per_unit: Decimal::ZERO,
            total: dec("1000000"),
        };
        data.baps_leave.sick_leave = PayEntry {
            quantity: Decimal::MAX,
            unit: TimeUnit::Hours,
            rate_per_unit: Decimal::ZERO,
            total: dec("1"),
        };

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(report.entries.len(), 2);
        for entry in &report.entries {
            assert_eq!(entry.check.status, ComplianceStatus::NotComputable);
        }
        assert_eq!(report.totals.total_shortfall, Decimal::ZERO);
        assert!(report.audit_trace.has_warning(WARNING_ENTRY_NOT_COMPUTABLE));
    }

    #[test]
    fn test_no_rates_is_insufficient_data() {
        let mut data = PayslipData::default();
        data.pay_period = payslip().pay_period;
        data.baps_leave.public_holidays = PayEntry::priced(dec("8"), TimeUnit::Hours, dec("30"));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(
            report.entries[0].check.status,
            ComplianceStatus::InsufficientData
        );
        assert!(report.audit_trace.has_warning(WARNING_INSUFFICIENT_DATA));
        assert!(report.minimum_wage.is_none());
    }

    #[test]
    fn test_below_minimum_wage_warns() {
        let mut data = payslip();
        data.employment_conditions.ordinary_pay = Some(OrdinaryPay::hourly(dec("20")));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        let check = report.minimum_wage.unwrap();
        assert_eq!(check.minimum_wage, dec("23.50"));
        assert!(!check.meets_minimum);
        assert!(report.audit_trace.has_warning(WARNING_BELOW_MINIMUM_WAGE));
    }

    #[test]
    fn test_waived_minimum_wage_does_not_warn() {
        let mut data = payslip();
        let mut ordinary = OrdinaryPay::hourly(dec("18.52"));
        ordinary.allow_below_minimum = true;
        data.employment_conditions.ordinary_pay = Some(ordinary);

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert!(report.minimum_wage.unwrap().waived);
        assert!(!report.audit_trace.has_warning(WARNING_BELOW_MINIMUM_WAGE));
    }

    #[test]
    fn test_minimum_wage_unknown_before_schedules() {
        let mut data = payslip();
        data.pay_period.start_date = Some(date(2019, 6, 3));
        data.pay_period.end_date = Some(date(2019, 6, 16));

        let report = analyse_payslip(&data, &loader(), date(2019, 6, 17)).unwrap();

        assert!(report.minimum_wage.is_none());
        assert!(report.audit_trace.has_warning(WARNING_MINIMUM_WAGE_UNKNOWN));
    }

    #[test]
    fn test_worked_rate_below_ordinary_warns() {
        let mut data = payslip();
        data.employment_conditions.ordinary_pay = Some(OrdinaryPay::hourly(dec("27")));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();
        assert!(report.audit_trace.has_warning(WARNING_WORKED_RATE_BELOW_ORDINARY));
    }

    #[test]
    fn test_short_period_warns_about_estimate() {
        let report = analyse_payslip(&payslip(), &loader(), today()).unwrap();

        assert!(report.holiday_comparison.used_estimate);
        assert!(report.audit_trace.has_warning(WARNING_SHORT_PAY_HISTORY));
    }

    #[test]
    fn test_significant_difference_warns() {
        let mut data = payslip();
        data.employment_conditions.ordinary_pay = Some(OrdinaryPay::hourly(dec("30")));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert!(report.rate_summary.significant_difference);
        assert!(report.audit_trace.has_warning(WARNING_SIGNIFICANT_RATE_DIFFERENCE));
    }

    #[test]
    fn test_invalid_work_pattern_uses_defaults() {
        let mut data = payslip();
        data.employment_conditions.work_pattern = WorkPattern {
            hours_per_day: dec("30"),
            days_per_week: dec("4"),
        };

        let report = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(report.work_pattern.hours_per_day, dec("8"));
        assert_eq!(report.work_pattern.days_per_week, dec("4"));
        assert!(report.audit_trace.has_warning(WARNING_WORK_PATTERN_DEFAULTED));
    }

    #[test]
    fn test_missing_pay_period_date_is_error() {
        let mut data = payslip();
        data.pay_period.end_date = None;

        match analyse_payslip(&data, &loader(), today()) {
            Err(EngineError::InvalidPayPeriod { message }) => {
                assert!(message.contains("end date"));
            }
            other => panic!("Expected InvalidPayPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_pay_period_is_error() {
        let mut data = payslip();
        data.pay_period.start_date = Some(date(2025, 6, 20));

        assert!(matches!(
            analyse_payslip(&data, &loader(), today()),
            Err(EngineError::InvalidPayPeriod { .. })
        ));
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let mut data = payslip();
        data.holiday_pay.annual_leave = PayEntry::priced(dec("8"), TimeUnit::Hours, dec("25"));

        let report = analyse_payslip(&data, &loader(), today()).unwrap();
        let steps = &report.audit_trace.steps;

        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        let rule_ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "work_pattern",
                "minimum_wage",
                "worked_time_rate",
                "holiday_pay_comparison",
                "baps_leave_comparison",
                "leave_compliance",
                "rate_summary",
            ]
        );
    }

    #[test]
    fn test_repeated_analysis_gives_same_figures() {
        let mut data = payslip();
        data.ytd_earnings.total = dec("12345.67");
        data.baps_leave.sick_leave = PayEntry::priced(dec("1"), TimeUnit::Days, dec("190"));

        let first = analyse_payslip(&data, &loader(), today()).unwrap();
        let second = analyse_payslip(&data, &loader(), today()).unwrap();

        assert_eq!(first.entries, second.entries);
        assert_eq!(first.holiday_comparison, second.holiday_comparison);
        assert_eq!(first.totals, second.totals);
        assert_ne!(first.analysis_id, second.analysis_id);
    }
}
