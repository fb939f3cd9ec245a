// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Compilation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scadgen::{compile, create_part, cube, union, Pattern, Solid, Vec3, STANDARD_PIECES};

fn bench_pieces(c: &mut Criterion) {
    let mut group = c.benchmark_group("pieces");

    for (name, rows) in STANDARD_PIECES {
        let pattern = Pattern::from_rows(rows).unwrap();
        group.bench_with_input(BenchmarkId::new("build", name), &pattern, |b, pattern| {
            b.iter(|| compile(&create_part(black_box(pattern))).unwrap());
        });
    }

    group.finish();
}

fn bench_transform_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_chains");

    for depth in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("nested", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut shape = cube();
                for step in 0..depth {
                    shape = shape.translate(Vec3::new(step as f64, 0.0, 0.0));
                }
                compile(black_box(&shape)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_wide_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_unions");

    for width in [8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("fold", width), &width, |b, &width| {
            b.iter(|| {
                let shapes: Vec<Solid> = (0..width)
                    .map(|step| cube().translate(Vec3::new(step as f64, 0.0, 0.0)))
                    .collect();
                compile(&union(black_box(shapes))).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pieces,
    bench_transform_chains,
    bench_wide_unions
);
criterion_main!(benches);
