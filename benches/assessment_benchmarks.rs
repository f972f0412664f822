//! Performance benchmarks for the pension bridge engine.
//!
//! Covers a direct call to `assess`, a full `/assess` round trip through
//! the router, and batches of varied profiles.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use pension_bridge::api::{AppState, create_router};
use pension_bridge::calculation::assess;
use pension_bridge::config::ConfigLoader;
use pension_bridge::models::{
    AssessmentInput, ContributionScheme, EmploymentSituation, Gender, IncentiveChoice, Region,
    WorkerProfile,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/italy_2025").expect("Failed to load config")
}

fn sample_input(age: u32, contribution_years: u32, region: Region) -> AssessmentInput {
    AssessmentInput {
        profile: WorkerProfile {
            age,
            gender: if age % 2 == 0 { Gender::Male } else { Gender::Female },
            region,
            contribution_scheme: ContributionScheme::PrivateEmployee,
            contribution_years,
            early_career: false,
            hazardous_occupation: age % 5 == 0,
            gross_annual_salary: Decimal::new(45000, 0),
        },
        situation: EmploymentSituation {
            unemployed: true,
            trailing_contribution_months: 48,
            ..Default::default()
        },
        complementary_pension_capital: Decimal::new(60000, 0),
        incentive: IncentiveChoice::Automatic,
        evaluation_date: NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"),
    }
}

fn request_body(age: u32, contribution_years: u32, region: Region) -> String {
    serde_json::json!({
        "profile": {
            "age": age,
            "gender": "male",
            "region": region,
            "contribution_years": contribution_years,
            "gross_annual_salary": "45000"
        },
        "situation": { "unemployed": true, "trailing_contribution_months": 48 },
        "complementary_pension_capital": "60000",
        "evaluation_date": "2026-10-19"
    })
    .to_string()
}

/// Benchmark: the calculation pipeline without HTTP.
fn bench_assess_direct(c: &mut Criterion) {
    let config = load_config();
    let input = sample_input(63, 38, Region::Lombardia);

    c.bench_function("assess_direct", |b| {
        b.iter(|| black_box(assess(black_box(&input), config.regional_costs(), Vec::new())))
    });
}

/// Benchmark: a single `/assess` request through the router.
fn bench_assess_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = request_body(63, 38, Region::Lombardia);

    c.bench_function("assess_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/assess")
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

/// Benchmark: batches of assessments across ages and regions.
fn bench_batches(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("batch_assessments");

    for size in [10usize, 100, 1000] {
        let inputs: Vec<AssessmentInput> = (0..size)
            .map(|i| {
                let age = 55 + (i % 12) as u32;
                let years = 25 + (i % 20) as u32;
                let region = Region::ALL[i % Region::ALL.len()];
                sample_input(age, years, region)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("assess", size), &inputs, |b, inputs| {
            b.iter(|| {
                let results: Vec<_> = inputs
                    .iter()
                    .map(|input| assess(input, config.regional_costs(), Vec::new()))
                    .collect();
                black_box(results)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_assess_direct,
    bench_assess_request,
    bench_batches,
);
criterion_main!(benches);
