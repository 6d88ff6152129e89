// ABOUTME: Criterion benchmarks for the pace conversion engine
// ABOUTME: Measures time-to-pace and pace-to-time conversions across the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for pace conversions.
//!
//! Every conversion is a handful of float operations plus string formatting,
//! so these mostly track formatting and allocation cost.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pace_calculator::export::export_text;
use pace_calculator::{calculate_results, DistanceCatalog, Mode};

fn bench_time_to_pace(c: &mut Criterion) {
    let catalog = DistanceCatalog::standard();
    let mut group = c.benchmark_group("time_to_pace");

    for distance in catalog.distances() {
        group.bench_with_input(
            BenchmarkId::new("calculate_results", &distance.id),
            distance,
            |b, distance| {
                b.iter(|| {
                    calculate_results(
                        black_box(Mode::TimeToPace),
                        black_box(distance),
                        black_box("1"),
                        black_box("45"),
                        black_box("30"),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_pace_to_time(c: &mut Criterion) {
    let catalog = DistanceCatalog::standard();
    let mut group = c.benchmark_group("pace_to_time");

    for distance in catalog.distances() {
        group.bench_with_input(
            BenchmarkId::new("calculate_results", &distance.id),
            distance,
            |b, distance| {
                b.iter(|| {
                    calculate_results(
                        black_box(Mode::PaceToTime),
                        black_box(distance),
                        black_box(""),
                        black_box("7"),
                        black_box("45"),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let catalog = DistanceCatalog::standard();
    let marathon = catalog.lookup(Some("marathon"));
    let outcome = calculate_results(Mode::TimeToPace, marathon, "3", "30", "0");

    c.bench_function("export_text/marathon", |b| {
        b.iter(|| export_text(black_box(marathon), Mode::TimeToPace, black_box(&outcome)));
    });
}

criterion_group!(benches, bench_time_to_pace, bench_pace_to_time, bench_export);
criterion_main!(benches);
