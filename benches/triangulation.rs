//! Benchmarks for Delaunay triangulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tessella::triangulation::{
    triangulate, triangulate_edges, triangulate_with, InsertionOrder, TriangulationOptions,
    Triangulator,
};
use tessella::Point2;

/// Generates random points in a 100 x 100 square.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x, y));
    }

    points
}

/// Generates a regular grid, which is full of cocircular quadruples.
fn generate_grid(side: usize) -> Vec<Point2<f64>> {
    (0..side)
        .flat_map(|i| (0..side).map(move |j| Point2::new(i as f64, j as f64)))
        .collect()
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for count in [50, 200, 500, 1000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts)))
        });
    }

    for side in [8, 16, 24] {
        let points = generate_grid(side);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(BenchmarkId::new("grid", points.len()), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_insertion_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_order");
    let points = generate_random_points(500, 54321);

    let as_given = TriangulationOptions::default();
    group.bench_function("as_given", |b| {
        b.iter(|| triangulate_with(black_box(&points), black_box(&as_given)))
    });

    let lexicographic = as_given.with_insertion_order(InsertionOrder::Lexicographic);
    group.bench_function("lexicographic", |b| {
        b.iter(|| triangulate_with(black_box(&points), black_box(&lexicographic)))
    });

    group.finish();
}

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_edges");

    for count in [100, 500] {
        let points = generate_random_points(count, 99999);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| triangulate_edges(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_setup(c: &mut Criterion) {
    let points = generate_random_points(1000, 777);

    c.bench_function("triangulator_new_1000", |b| {
        b.iter(|| Triangulator::new(black_box(&points), TriangulationOptions::default()))
    });
}

criterion_group!(
    benches,
    bench_triangulate,
    bench_insertion_order,
    bench_edges,
    bench_setup,
);
criterion_main!(benches);
