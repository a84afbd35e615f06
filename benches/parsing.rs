//! Benchmarks for kakaopack parsing and statistics operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- pc_parsing`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use kakaopack::config::{ParserConfig, StatsConfig};
use kakaopack::parser::KakaoParser;
use kakaopack::prompt::build_analysis_request;
use kakaopack::sample::{AnalysisTier, sample_evenly};
use kakaopack::stats::all_participant_stats;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_pc_export(count: usize) -> String {
    let mut out = String::from(
        "----------------- 2024년 1월 15일 월요일 -----------------\n",
    );
    for i in 0..count {
        let sender = if i % 2 == 0 { "민수" } else { "영희" };
        let meridiem = if (i / 60) % 24 < 12 { "오전" } else { "오후" };
        let hour = ((i / 60) % 12).max(1);
        out.push_str(&format!(
            "[{}] [{} {}:{:02}] 메시지 내용 {} ㅋㅋ\n",
            sender,
            meridiem,
            hour,
            i % 60,
            i
        ));
    }
    out
}

fn generate_android_export(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let sender = if i % 2 == 0 { "민수" } else { "영희" };
        out.push_str(&format!(
            "2024년 1월 {}일 오후 {}:{:02}, {} : 안드로이드 메시지 {}\n",
            (i / 720) % 28 + 1,
            i % 11 + 1,
            i % 60,
            sender,
            i
        ));
    }
    out
}

fn pinned_parser() -> KakaoParser {
    KakaoParser::with_config(
        ParserConfig::new().with_fallback_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    )
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_pc_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pc_parsing");
    let parser = pinned_parser();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let export = generate_pc_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                let chat = parser.parse_str(black_box(export));
                black_box(chat);
            });
        });
    }
    group.finish();
}

fn bench_android_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("android_parsing");
    let parser = pinned_parser();

    for size in [100_usize, 1_000, 10_000] {
        let export = generate_android_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                let chat = parser.parse_str(black_box(export));
                black_box(chat);
            });
        });
    }
    group.finish();
}

// =============================================================================
// Statistics Benchmarks
// =============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let parser = pinned_parser();
    let config = StatsConfig::new();

    for size in [1_000_usize, 10_000] {
        let chat = parser.parse_str(&generate_pc_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &chat, |b, chat| {
            b.iter(|| {
                let stats = all_participant_stats(black_box(chat), &config);
                black_box(stats);
            });
        });
    }
    group.finish();
}

// =============================================================================
// Sampling and Request Benchmarks
// =============================================================================

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let parser = pinned_parser();
    let chat = parser.parse_str(&generate_pc_export(50_000));

    for budget in [100_usize, 300] {
        group.bench_with_input(
            BenchmarkId::from_parameter(budget),
            &budget,
            |b, &budget| {
                b.iter(|| {
                    let sampled = sample_evenly(black_box(&chat.messages), budget);
                    black_box(sampled);
                });
            },
        );
    }
    group.finish();
}

fn bench_request_building(c: &mut Criterion) {
    let parser = pinned_parser();
    let config = StatsConfig::new();
    let chat = parser.parse_str(&generate_pc_export(10_000));

    c.bench_function("build_analysis_request_10k", |b| {
        b.iter(|| {
            let request =
                build_analysis_request(black_box(&chat), AnalysisTier::Premium, &config);
            black_box(request);
        });
    });
}

criterion_group!(
    benches,
    bench_pc_parsing,
    bench_android_parsing,
    bench_statistics,
    bench_sampling,
    bench_request_building
);
criterion_main!(benches);
