//! Benchmarks for grid rendering, formatting and the text report

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lifeweeks_core::Language;
use lifeweeks_format::{format_large_number, format_number};
use lifeweeks_grid::{GridRenderer, Milestone, WeekGrid};
use lifeweeks_runtime::Report;
use lifeweeks_stats::all_stats_at;
use lifeweeks_time::Birthdate;

fn bench_grid_counts(c: &mut Criterion) {
    let grid = WeekGrid::for_life_expectancy(1_780, 80);

    c.bench_function("grid_walk_cells", |b| {
        b.iter(|| black_box(&grid).cells().filter(|cell| cell.has_milestone).count())
    });
}

fn bench_grid_render(c: &mut Criterion) {
    let grid = WeekGrid::for_life_expectancy(1_780, 80)
        .with_milestones((0..80).map(|year| Milestone::new("Birthday", year * 52)));
    let renderer = GridRenderer::new();

    c.bench_function("grid_render", |b| b.iter(|| renderer.render(black_box(&grid))));
}

fn bench_format_number(c: &mut Criterion) {
    c.bench_function("format_number_en", |b| {
        b.iter(|| format_number(black_box(1_234_567_890.0), Language::EnUs))
    });

    c.bench_function("format_number_es", |b| {
        b.iter(|| format_number(black_box(1_234_567.125), Language::EsEs))
    });

    c.bench_function("format_large_number", |b| {
        b.iter(|| format_large_number(black_box(88_000_000_000.0), Language::EnUs))
    });
}

fn bench_report(c: &mut Criterion) {
    let birth = Birthdate::parse("1990-05-01").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let stats = all_stats_at(&birth, now, 80).unwrap();
    let grid = WeekGrid::new(stats.life.weeks_lived, stats.life.total_weeks);
    let report = Report::new();

    c.bench_function("report_render", |b| {
        b.iter(|| report.render(black_box(&stats), black_box(&grid), Language::EnUs))
    });
}

criterion_group!(
    benches,
    bench_grid_counts,
    bench_grid_render,
    bench_format_number,
    bench_report,
);
criterion_main!(benches);
