#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization and clipping.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_kernel::prelude::*;
use std::hint::black_box;

fn line_rasterizer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_rasterizer");

    let mut fb = Framebuffer::new(1920, 1080).expect("framebuffer creation should succeed");

    for rasterizer in [LineRasterizer::Trivial, LineRasterizer::Antialiased] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rasterizer:?}")),
            &rasterizer,
            |b, &rasterizer| {
                b.iter(|| {
                    // 100 lines fanning from the corner
                    for i in 0..100 {
                        rasterizer.rasterize(
                            &mut fb,
                            (0, 0),
                            black_box((1919 - i * 19, 1079 - (99 - i) * 10)),
                            Rgba::RED,
                            Rgba::BLUE,
                        );
                    }
                });
            },
        );
    }

    group.finish();
}

fn offscreen_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("offscreen_line");

    // Mostly off-raster lines should cost only their visible span
    let mut fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");
    group.bench_function("long_line_800x600", |b| {
        b.iter(|| {
            LineRasterizer::Trivial.rasterize(
                &mut fb,
                black_box((-1_000_000, 300)),
                black_box((1_000_000, 301)),
                Rgba::WHITE,
                Rgba::WHITE,
            );
        });
    });

    group.finish();
}

fn clip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");

    let boundary = Polygon::from_points(vec![
        Point::new(100, 100),
        Point::new(700, 100),
        Point::new(700, 500),
        Point::new(100, 500),
    ])
    .oriented_for_clipping();

    for vertices in [8, 64, 512] {
        let subject: Polygon = (0..vertices)
            .map(|i| {
                let angle = f64::from(i) / f64::from(vertices) * std::f64::consts::TAU;
                Point::new(
                    (400.0 + 350.0 * angle.cos()).round() as i32,
                    (300.0 + 250.0 * angle.sin()).round() as i32,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &subject, |b, subject| {
            b.iter(|| clip_polygon(black_box(subject), &boundary));
        });
    }

    group.finish();
}

criterion_group!(benches, line_rasterizer_benchmark, offscreen_line_benchmark, clip_benchmark);
criterion_main!(benches);
