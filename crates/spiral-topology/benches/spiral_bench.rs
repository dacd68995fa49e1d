//! Benchmarks for the square spiral
//!
//! Measures performance of:
//! - Spiral index to coordinate conversion and back
//! - Ring detection
//! - Neighbor-sum spiral generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spiral_topology::{
    coord_to_spiral, spiral_to_coord, NeighborSumSpiral, Spiral, SpiralIndex, SquareCoord,
};

/// Benchmark spiral index to coordinate conversion
fn bench_spiral_to_coord(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_to_coord");

    for &index in &[0u64, 10, 1000, 265_148, 1_000_000_000, u64::MAX] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &idx| {
            b.iter(|| spiral_to_coord(black_box(SpiralIndex(idx))))
        });
    }
    group.finish();
}

/// Benchmark coordinate to spiral index conversion
fn bench_coord_to_spiral(c: &mut Criterion) {
    let mut group = c.benchmark_group("coord_to_spiral");

    let coords = [
        SquareCoord::ORIGIN,
        SquareCoord::new(1, 0),
        SquareCoord::new(-15, 16),
        SquareCoord::new(257, -181),
        SquareCoord::new(-100_000, 99_999),
    ];

    for coord in coords {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("ring", coord.ring()), &coord, |b, &c| {
            b.iter(|| coord_to_spiral(black_box(c)))
        });
    }
    group.finish();
}

/// Benchmark ring detection
fn bench_ring_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_detection");

    for &index in &[0u64, 24, 1023, 1_000_000, u64::MAX] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &idx| {
            let spiral_idx = SpiralIndex(idx);
            b.iter(|| black_box(spiral_idx).ring())
        });
    }
    group.finish();
}

/// Benchmark batch iteration over spiral
fn bench_spiral_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_iteration");

    for &count in &[100u64, 1000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| Spiral::take_slots(black_box(n)).count())
        });
    }
    group.finish();
}

/// Benchmark neighbor-sum spiral up to a threshold
fn bench_first_exceeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_exceeding");

    for &threshold in &[747u64, 265_149, 1_000_000_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &threshold,
            |b, &t| b.iter(|| NeighborSumSpiral::new().first_exceeding(black_box(t))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_spiral_to_coord,
    bench_coord_to_spiral,
    bench_ring_detection,
    bench_spiral_iteration,
    bench_first_exceeding,
);

criterion_main!(benches);
