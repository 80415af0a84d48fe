//! Benchmarks for the generic 2D algebra and the fixed-length vectors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use geometry::vector::{Vector4, VectorN, VectorType};
use geometry::{normalize_angle, vector, Point2, Point2D};

/// Generates random points for benchmarking.
fn generate_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
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

fn bench_distance_to_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_to_segment");

    let v = Point2::new(0.0, 0.0);
    let w = Point2::new(100.0, 50.0);

    for count in [100, 1000, 10000] {
        let points = generate_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("point2", count), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|p| p.distance_to_segment(black_box(v), black_box(w)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let center = Point2::new(50.0, 50.0);

    for count in [100, 1000, 10000] {
        let points = generate_points(count, 54321);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("rotated_around", count), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|p| p.rotated_around(black_box(0.75), center))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_normalize_angle(c: &mut Criterion) {
    let angles: Vec<f64> = generate_points(1000, 777)
        .iter()
        .map(|p| p.x - p.y)
        .collect();

    c.bench_function("normalize_angle", |b| {
        b.iter(|| {
            angles
                .iter()
                .map(|&a| normalize_angle(black_box(a), 0.0))
                .sum::<f64>()
        })
    });
}

fn bench_vector_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_dot");

    let a: Vector4<f64> = vector![1.0, 2.0, 3.0, 4.0];
    let b: Vector4<f64> = vector![5.0, 6.0, 7.0, 8.0];
    group.bench_function("cons", |bench| {
        bench.iter(|| black_box(a).dot(&black_box(b)))
    });

    let an = VectorN::new([1.0, 2.0, 3.0, 4.0]);
    let bn = VectorN::new([5.0, 6.0, 7.0, 8.0]);
    group.bench_function("array", |bench| {
        bench.iter(|| black_box(an).dot(&black_box(bn)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_distance_to_segment,
    bench_rotation,
    bench_normalize_angle,
    bench_vector_dot
);
criterion_main!(benches);
