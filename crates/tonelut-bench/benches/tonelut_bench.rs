//! Benchmarks for tonelut operations.
//!
//! Run with: `cargo bench -p tonelut-bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tonelut_core::Region;
use tonelut_lut::{remap, ToneLut};
use tonelut_ops::apply::{apply_all, apply_region};
use tonelut_ops::{AdjusterConfig, ImageAdjuster, PixelBuffer};

fn graded_lut() -> ToneLut {
    let mut lut = ToneLut::identity();
    lut.brightness(0.05);
    lut.contrast(1.2);
    lut.gamma(1.1);
    lut
}

fn noise(len: usize) -> Vec<u32> {
    (0..len as u32).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

/// Benchmark building and composing tables.
fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let negate = remap::negate();

    group.bench_function("reset_brightness_contrast_gamma", |b| {
        let mut lut = ToneLut::identity();
        b.iter(|| {
            lut.reset();
            lut.brightness(black_box(0.1));
            lut.contrast(black_box(1.3));
            lut.gamma(black_box(0.9));
        })
    });

    group.bench_function("map_negate", |b| {
        let mut lut = graded_lut();
        b.iter(|| lut.map(black_box(&negate)).unwrap())
    });

    group.finish();
}

/// Benchmark applying a table to whole buffers.
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let lut = graded_lut();

    for (w, h) in [(640u32, 480u32), (1920, 1080), (3840, 2160)] {
        let src = noise(w as usize * h as usize);
        group.throughput(Throughput::Elements(src.len() as u64));

        group.bench_with_input(BenchmarkId::new("apply_all", format!("{w}x{h}")), &src, |b, src| {
            let mut pixels = src.clone();
            b.iter(|| apply_all(&lut, black_box(&mut pixels), w, h).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("apply_region_half", format!("{w}x{h}")), &src, |b, src| {
            let mut pixels = src.clone();
            let region = Region::new(w as i32 / 4, h as i32 / 4, w as i32 / 2, h as i32 / 2);
            b.iter(|| apply_region(&lut, black_box(&mut pixels), w, h, region).unwrap())
        });
    }

    group.finish();
}

/// Serial versus rayon path on a 1080p frame.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let (w, h) = (1920u32, 1080u32);
    group.throughput(Throughput::Elements(w as u64 * h as u64));

    for (name, config) in [
        ("serial", AdjusterConfig::default().serial()),
        ("parallel", AdjusterConfig::default().with_parallel_threshold(0)),
    ] {
        let mut adjust = ImageAdjuster::with_config(config);
        let mut image = PixelBuffer::from_vec(w, h, noise(w as usize * h as usize)).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| adjust.contrast_image(black_box(&mut image), 1.2).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table, bench_apply, bench_parallel);
criterion_main!(benches);
