//! Criterion benchmarks for seed construction, individual operators, and
//! full notation pipelines.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use conway::prelude::*;

fn bench_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeds");
    for (symbol, name) in available_seeds() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(seed(black_box(symbol)).unwrap()));
        });
    }
    group.finish();
}

fn bench_operators_on_cube(c: &mut Criterion) {
    let input = cube();
    let mut group = c.benchmark_group("operators/cube");

    group.bench_function("dual", |b| b.iter(|| black_box(dual(&input))));
    group.bench_function("ambo", |b| b.iter(|| black_box(ambo(&input))));
    group.bench_function("truncate", |b| b.iter(|| black_box(truncate(&input))));
    group.bench_function("kis", |b| b.iter(|| black_box(kis(&input))));
    group.bench_function("join", |b| b.iter(|| black_box(join(&input))));
    group.finish();
}

fn bench_operators_on_icosahedron(c: &mut Criterion) {
    let input = icosahedron();
    let mut group = c.benchmark_group("operators/icosahedron");

    group.bench_function("truncate", |b| b.iter(|| black_box(truncate(&input))));
    group.bench_function("snub", |b| b.iter(|| black_box(snub(&input))));
    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for notation in ["tI", "dtC", "dtkaC", "eD"] {
        group.bench_function(notation, |b| {
            b.iter(|| black_box(must_parse(black_box(notation))));
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let soccer_ball = must_parse("tI");
    let vertices = soccer_ball.vertex_keys();

    let mut group = c.benchmark_group("queries");
    group.bench_function("centroid_cached", |b| {
        b.iter(|| black_box(soccer_ball.centroid()));
    });
    group.bench_function("edges_around_vertex", |b| {
        b.iter(|| {
            for &vertex in &vertices {
                black_box(soccer_ball.edges_around_vertex(vertex));
            }
        });
    });
    group.bench_function("geometry_stats", |b| {
        b.iter(|| black_box(soccer_ball.geometry_stats()));
    });
    group.bench_function("validate_complete", |b| {
        b.iter(|| black_box(validate_complete(&soccer_ball).is_ok()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_seeds,
    bench_operators_on_cube,
    bench_operators_on_icosahedron,
    bench_pipelines,
    bench_queries
);
criterion_main!(benches);
