//! Performance benchmarks for the leave pay compliance engine.
//!
//! Covers the "greater of" comparison on its own, a full payslip analysis,
//! normalising a payslip-reading model reply, and a full request through
//! the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use nz_leave_pay::api::{AppState, create_router};
use nz_leave_pay::calculation::{ComparisonInputs, analyse_payslip, select_leave_comparison};
use nz_leave_pay::config::ConfigLoader;
use nz_leave_pay::models::{
    ComparisonKind, OrdinaryPay, PayEntry, PayPeriod, PayslipData, TimeUnit, WorkPattern,
};
use nz_leave_pay::payslip::normalize_extraction;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/nz").expect("Failed to load config")
}

/// A fortnightly payslip with every leave line filled in.
fn create_payslip() -> PayslipData {
    let mut data = PayslipData::default();
    data.pay_period.start_date = Some(date(2025, 6, 2));
    data.pay_period.end_date = Some(date(2025, 6, 15));
    data.worked_time.worked_time = PayEntry::priced(dec("56"), TimeUnit::Hours, dec("25"));
    data.baps_leave.sick_leave = PayEntry::priced(dec("1"), TimeUnit::Days, dec("190"));
    data.baps_leave.public_holidays = PayEntry::priced(dec("8"), TimeUnit::Hours, dec("25"));
    data.holiday_pay.annual_leave = PayEntry::priced(dec("1"), TimeUnit::Days, dec("200"));
    data.ytd_earnings.total = dec("16500");
    data.employment_conditions.ordinary_pay = Some(OrdinaryPay::hourly(dec("25")));
    data
}

const EXTRACTION_REPLY: &str = r#"```json
{
  "payPeriod": { "startDate": "02/06/2025", "endDate": "15/06/2025" },
  "workedTime": { "workedTime": { "hours": "56", "rate": "$25.00", "total": "$1,400.00" } },
  "bapsLeave": {
    "sickLeave": { "time": "1", "unit": "days", "rate": "190" },
    "publicHolidays": { "amount": 8, "unitType": "hours", "rate": 25 }
  },
  "holidayPay": { "annualLeave": { "time": "1", "unit": "days", "rate": "200" } },
  "ytdEarnings": { "total": "16,500.00" },
  "employmentConditions": {
    "hoursPerDay": "8",
    "daysPerWeek": "5",
    "startDate": "",
    "ordinaryPay": { "amount": "25", "type": "hourly", "allowBelowMinimum": false }
  }
}
```"#;

fn bench_comparison(c: &mut Criterion) {
    let inputs = ComparisonInputs {
        pattern: WorkPattern::default(),
        pay_period: PayPeriod::new(date(2025, 6, 2), date(2025, 6, 15)).unwrap(),
        ytd_total: dec("16500"),
        ordinary_pay: Some(OrdinaryPay::hourly(dec("25"))),
        employment_start: None,
        worked_hourly_rate: dec("25"),
        today: date(2025, 6, 16),
        sufficient_history_weeks: 4,
    };

    let mut group = c.benchmark_group("comparison");
    for kind in [ComparisonKind::HolidayPay, ComparisonKind::BapsLeave] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", kind)),
            &kind,
            |b, kind| b.iter(|| select_leave_comparison(black_box(&inputs), *kind)),
        );
    }
    group.finish();
}

fn bench_analyse_payslip(c: &mut Criterion) {
    let loader = load_config();
    let payslip = create_payslip();
    let today = date(2025, 6, 16);

    c.bench_function("analyse_payslip", |b| {
        b.iter(|| analyse_payslip(black_box(&payslip), &loader, today).unwrap())
    });
}

fn bench_normalize_extraction(c: &mut Criterion) {
    c.bench_function("normalize_extraction", |b| {
        b.iter(|| normalize_extraction(black_box(EXTRACTION_REPLY)).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let loader = load_config();
    let today = date(2025, 6, 16);

    let mut group = c.benchmark_group("batch");
    for size in [10usize, 100, 1000] {
        let payslips: Vec<PayslipData> = (0..size)
            .map(|i| {
                let mut data = create_payslip();
                data.ytd_earnings.total += Decimal::from(i as u64 * 10);
                data
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payslips, |b, payslips| {
            b.iter(|| {
                for payslip in payslips {
                    black_box(analyse_payslip(payslip, &loader, today).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_http_analyse(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "payslip": {
            "payPeriod": { "startDate": "2025-06-02", "endDate": "2025-06-15" },
            "workedTime": { "workedTime": { "hours": "56", "rate": "25" } },
            "holidayPay": { "annualLeave": { "time": "1", "unit": "days", "rate": "200" } },
            "ytdEarnings": { "total": "16500" },
            "employmentConditions": { "ordinaryPay": { "amount": "25", "type": "hourly" } }
        },
        "as_of": "2025-06-16"
    })
    .to_string();

    c.bench_function("http_analyse", |b| {
        b.to_async(&runtime).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/analyse")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_comparison,
    bench_analyse_payslip,
    bench_normalize_extraction,
    bench_batch,
    bench_http_analyse,
);
criterion_main!(benches);
