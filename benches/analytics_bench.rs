//! Benchmarks for the Moodscope analytics engine
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moodscope::analytics::{self, ReportCache};
use moodscope::config::AnalysisConfig;
use moodscope::observation::{Factor, Observation, TimeOfDay};

const WEATHER: [&str; 4] = ["sunny", "cloudy", "rainy", "snowy"];
const TAGS: [&str; 6] = ["work", "family", "exercise", "outdoor", "stress", "reading"];

fn create_journal(count: usize) -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let mood = ((i * 7) % 11) as f64 * 0.9;
            let mut obs = Observation::new(start + Duration::days(i as i64), mood)
                .tag(TAGS[i % TAGS.len()])
                .tag(TAGS[(i / 3) % TAGS.len()])
                .weather(WEATHER[i % WEATHER.len()])
                .time_of_day(TimeOfDay::all()[i % 4]);

            if i % 5 != 0 {
                obs = obs.sleep_hours(4.0 + (i % 6) as f64);
            }
            if i % 3 != 0 {
                obs = obs.exercise_minutes(((i * 13) % 70) as f64);
            }
            obs.stress_level(((i * 3) % 10) as f64)
        })
        .collect()
}

fn bench_aggregators(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregators");

    for size in [100, 1000, 5000] {
        let journal = create_journal(size);
        let config = AnalysisConfig::default();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("correlate_all_{}", size), |b| {
            b.iter(|| analytics::correlate_all(black_box(&journal), Factor::all()))
        });

        group.bench_function(format!("triggers_{}", size), |b| {
            b.iter(|| analytics::analyze_triggers(black_box(&journal), &config.triggers))
        });

        group.bench_function(format!("seasonal_{}", size), |b| {
            b.iter(|| analytics::aggregate_by_month(black_box(&journal)))
        });

        group.bench_function(format!("report_{}", size), |b| {
            b.iter(|| analytics::analyze(black_box(&journal), &config))
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let journal = create_journal(1000);

    group.bench_function("cached_report_1000", |b| {
        let mut cache = ReportCache::new(AnalysisConfig::default());
        b.iter(|| cache.report(black_box(&journal)).summary.entries)
    });

    group.finish();
}

criterion_group!(benches, bench_aggregators, bench_cache);
criterion_main!(benches);
