//! Benchmarks the heading sequence validator over long observed sequences.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use siteaudit::{HeadingLevel, domain::check_sequence};

fn check_long_sequence(c: &mut Criterion) {
    let levels: Vec<HeadingLevel> = (0..10_000).map(|i| HeadingLevel::ALL[i % 6]).collect();

    c.bench_function("check 10k headings", |b| {
        b.iter(|| check_sequence(black_box(&levels)));
    });
}

fn check_worst_case(c: &mut Criterion) {
    // Every expected level first occurs at the very end of the page.
    let mut levels = vec![HeadingLevel::H6; 10_000];
    levels.extend(HeadingLevel::ALL);

    c.bench_function("check late first occurrences", |b| {
        b.iter(|| check_sequence(black_box(&levels)));
    });
}

criterion_group!(benches, check_long_sequence, check_worst_case);
criterion_main!(benches);
