//! Performance benchmarks for mood classification and entry handling.
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mooddiary::diary_core::stats::aggregate_mood_counts;
use mooddiary::diary_core::DiaryState;
use mooddiary::sentiment::classify;

const SAMPLE: &str = "Woke up happy, had a good breakfast, then a terrible commute \
    made me angry but the evening was great and I feel excited about tomorrow";

/// Benchmark classification at various text lengths.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for repeats in [1usize, 10, 100] {
        let text = vec![SAMPLE; repeats].join(" ");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| classify(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark adding entries, which includes badge evaluation over the full history.
fn bench_add_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_entries");
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut diary = DiaryState::new();
                for _ in 0..count {
                    black_box(diary.add_entry(SAMPLE, now));
                }
                black_box(aggregate_mood_counts(diary.list_entries().unwrap_or(&[])));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_add_entries);
criterion_main!(benches);
