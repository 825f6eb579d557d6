//! Benchmarks for colormap sampling and the masky transform.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cmap_core::{registry, Colormap, ColormapOptions};
use cmap_masky::{masky, pointwise};

/// Benchmark lookup table construction.
fn bench_lut_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_build");

    for size in [256usize, 1024, 4096].iter() {
        let options = ColormapOptions::default().with_lut_size(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("afmhot", size), &options, |b, opts| {
            b.iter(|| {
                let cmap = registry::get("afmhot").unwrap();
                let cmap = cmap.resampled(opts.lut_size).unwrap();
                black_box(cmap.lut().len())
            })
        });

        group.bench_with_input(BenchmarkId::new("afmhot_masky", size), &options, |b, opts| {
            b.iter(|| {
                let cmap = cmap_masky::derive("afmhot", None, *opts).unwrap();
                black_box(cmap.lut().len())
            })
        });

        group.bench_with_input(BenchmarkId::new("jet", size), &options, |b, opts| {
            b.iter(|| {
                let cmap = registry::get("jet").unwrap().resampled(opts.lut_size).unwrap();
                black_box(cmap.lut().len())
            })
        });
    }

    group.finish();
}

/// Benchmark sampling of a built lookup table.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let original = registry::get("gnuplot2").unwrap();
    let derived: Colormap = masky(&original).unwrap();
    let _ = (original.lut(), derived.lut());

    for size in [1000, 10000, 100000].iter() {
        let xs: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("gnuplot2", size), &xs, |b, v| {
            b.iter(|| original.sample_many(black_box(v)))
        });

        group.bench_with_input(BenchmarkId::new("gnuplot2_masky", size), &xs, |b, v| {
            b.iter(|| derived.sample_many(black_box(v)))
        });
    }

    group.finish();
}

/// Benchmark the pointwise transform on its own.
fn bench_pointwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointwise");

    let colors: Vec<[f32; 3]> = (0..10000)
        .map(|i| {
            let t = i as f32 / 10000.0;
            [t, t * t, 1.0 - t]
        })
        .collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("rgb_to_rgba", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&[r, g, bl]| pointwise(black_box(r), black_box(g), black_box(bl)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lut_build, bench_sample, bench_pointwise);

criterion_main!(benches);
