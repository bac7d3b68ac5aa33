// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use buildgeom::surface::Detail;
use buildgeom::{build, build_pooled, demo, Primitive, SurfaceConfig, SurfacePool};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("box", |b| {
        b.iter(|| {
            build("box", |g| {
                g.cuboid(black_box(10.0), 10.0, 10.0);
                Ok(())
            })
            .unwrap()
        });
    });

    for detail in [16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("sphere", detail), &detail, |b, &detail| {
            b.iter(|| {
                build("sphere", |g| {
                    g.primitive(&Primitive::Sphere {
                        radius: black_box(10.0),
                        detail: Some(Detail::new(detail, detail)),
                    });
                    Ok(())
                })
                .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    group.bench_function("nested_push_pop_100", |b| {
        b.iter(|| {
            build("grid", |g| {
                for i in 0..100 {
                    g.push();
                    g.translate((i as f64, 0.0, 0.0));
                    g.rotate_y(i as f64 * 0.1);
                    g.scale((1.0, 2.0, 1.0));
                    g.cube(1.0);
                    g.pop()?;
                }
                Ok(())
            })
            .unwrap()
        });
    });

    group.finish();
}

fn bench_demos(c: &mut Criterion) {
    let mut group = c.benchmark_group("demos");
    group.sample_size(20);

    group.bench_function("shapes", |b| b.iter(|| demo::shapes().unwrap()));
    group.bench_function("tree", |b| b.iter(|| demo::tree(black_box(1)).unwrap()));
    group.bench_function("colored_tree", |b| {
        b.iter(|| demo::colored_tree(black_box(1)).unwrap())
    });

    let mut pool = SurfacePool::immediate(SurfaceConfig::default());
    group.bench_function("pooled_spheres", |b| {
        b.iter(|| {
            build_pooled(&mut pool, "spheres", |g| {
                for _ in 0..10 {
                    g.sphere(5.0);
                    g.translate((12.0, 0.0, 0.0));
                }
                Ok(())
            })
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_transforms, bench_demos);
criterion_main!(benches);
