// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for pair discovery and the per-event slider math.

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_reveal::pair_navigator::PairNavigator;
use iced_reveal::ui::compare::{reveal, tracker};
use std::fs::File;
use std::hint::black_box;
use tempfile::TempDir;

fn populated_directory(pair_count: usize) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for i in 0..pair_count {
        for half in ["before", "after"] {
            let path = dir.path().join(format!("shot{i:04}_{half}.jpg"));
            File::create(path).expect("create file");
        }
        // Noise the scanner has to skip over.
        File::create(dir.path().join(format!("note{i:04}.txt"))).expect("create file");
    }
    dir
}

fn bench_scan_directory(c: &mut Criterion) {
    let dir = populated_directory(500);

    c.bench_function("scan_directory_500_pairs", |b| {
        b.iter(|| {
            let mut navigator = PairNavigator::new();
            navigator
                .scan_directory(black_box(dir.path()))
                .expect("scan");
            black_box(navigator.len())
        });
    });
}

fn bench_slider_math(c: &mut Criterion) {
    let surface = Rectangle::new(Point::new(12.0, 48.0), Size::new(1600.0, 900.0));

    c.bench_function("normalized_position", |b| {
        b.iter(|| {
            for x in 0..1600 {
                black_box(tracker::normalized_position(black_box(x as f32), surface));
            }
        });
    });

    c.bench_function("layer_geometry", |b| {
        b.iter(|| {
            for p in 0..=100 {
                black_box(reveal::layer_geometry(black_box(p as f32)));
            }
        });
    });
}

criterion_group!(benches, bench_scan_directory, bench_slider_math);
criterion_main!(benches);
