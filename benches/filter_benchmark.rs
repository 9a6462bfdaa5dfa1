// ============================================================================
// Numeric Text Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Filter - Grapheme scan over inputs of different sizes and content
// 2. Formatter - Parse and format with the default decimal formatter
// 3. Synchronizer - One full edit step through the field
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_text::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let locale = LocaleSettings::en_us();

    for len in [8, 64, 1024].iter() {
        let digits: String = "1234567.89".chars().cycle().take(*len).collect();
        let mixed: String = "1a2.b3५.x".chars().cycle().take(*len).collect();

        group.bench_with_input(BenchmarkId::new("digits", len), &digits, |b, input| {
            b.iter(|| black_box(filter_numeric_text(input, true, &locale)));
        });

        group.bench_with_input(BenchmarkId::new("mixed", len), &mixed, |b, input| {
            b.iter(|| black_box(filter_numeric_text(input, true, &locale)));
        });
    }

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn benchmark_formatter(c: &mut Criterion) {
    let plain = DecimalFormatter::new(LocaleSettings::en_us()).unwrap();
    let grouped = plain.clone().with_grouping(true);
    let value = Decimal::new(123_456_789_123, 3);

    c.bench_function("formatter_parse", |b| {
        b.iter(|| black_box(plain.parse(black_box("1,234,567.891"))));
    });

    c.bench_function("formatter_format", |b| {
        b.iter(|| black_box(plain.format(black_box(&value))));
    });

    c.bench_function("formatter_format_grouped", |b| {
        b.iter(|| black_box(grouped.format(black_box(&value))));
    });
}

// ============================================================================
// Synchronizer Benchmarks
// ============================================================================

fn benchmark_text_change(c: &mut Criterion) {
    c.bench_function("sync_text_change", |b| {
        let mut field = TextNumberSyncBuilder::decimal()
            .with_locale(LocaleSettings::en_us())
            .build()
            .unwrap();
        let inputs = ["12a3.4", "12.34.5", "९९.१"];
        let mut i = 0;

        b.iter(|| {
            i = (i + 1) % inputs.len();
            black_box(field.submit_text_change(inputs[i]));
        });
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_formatter,
    benchmark_text_change,
);
criterion_main!(benches);
