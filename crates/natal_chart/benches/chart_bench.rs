use criterion::{Criterion, black_box, criterion_group, criterion_main};
use natal_chart::{
    ChartConfig, ChartInput, ChartReport, GeoLocation, Locale, OrbTable, compute_chart,
    find_aspects, house_cusps, sign_position,
};
use natal_core::{ALL_BODIES, PositionConfig, all_body_positions};
use natal_time::{JulianDay, julian_day_from_strings};

fn time_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("time");
    group.bench_function("julian_day_from_strings", |b| {
        b.iter(|| julian_day_from_strings(black_box("1990-06-15"), "14:30", "UTC+2"))
    });
    group.finish();
}

fn engines_bench(c: &mut Criterion) {
    let jd = JulianDay::from_value(2_448_058.0);
    let loc = GeoLocation::new(48.8566, 2.3522);
    let cfg = PositionConfig::default();

    let mut group = c.benchmark_group("engines");
    group.bench_function("all_body_positions", |b| {
        b.iter(|| all_body_positions(black_box(jd), &cfg))
    });
    group.bench_function("house_cusps", |b| {
        b.iter(|| house_cusps(black_box(jd), black_box(&loc)))
    });
    group.bench_function("sign_position", |b| {
        b.iter(|| sign_position(black_box(123.456)))
    });
    group.finish();
}

fn aspects_bench(c: &mut Criterion) {
    let bodies: Vec<_> = ALL_BODIES
        .iter()
        .enumerate()
        .map(|(i, &b)| (b, (i as f64 * 47.3) % 360.0))
        .collect();
    let orbs = OrbTable::default();

    c.bench_function("find_aspects_11", |b| {
        b.iter(|| find_aspects(black_box(&bodies), &orbs))
    });
}

fn chart_bench(c: &mut Criterion) {
    let input = ChartInput::parse("1990-06-15", "14:30", "UTC+2", "48.8566", "2.3522")
        .expect("valid bench input");
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&input), &config))
    });
    group.bench_function("compute_and_report", |b| {
        b.iter(|| {
            compute_chart(black_box(&input), &config)
                .map(|chart| ChartReport::new(&chart, Locale::French))
        })
    });
    group.finish();
}

criterion_group!(benches, time_bench, engines_bench, aspects_bench, chart_bench);
criterion_main!(benches);
