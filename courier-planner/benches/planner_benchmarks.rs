//! Criterion benchmarks for the Dijkstra search and the multi-stop planner.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package courier-planner
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use courier_planner::{plan_route, shortest_path};


use bench_support::{BENCHMARK_SEED, generate_network, location_id};

/// Network sizes to benchmark.
const NETWORK_SIZES: &[usize] = &[100, 1_000, 5_000];

/// Outgoing links generated per location.
const DEGREE: usize = 4;

/// Stop counts for the planner benchmark.
const STOP_COUNTS: &[usize] = &[4, 8, 16];

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for &size in NETWORK_SIZES {
        let network = generate_network(size, DEGREE, BENCHMARK_SEED);
        let from = location_id(0);
        let to = location_id(size - 1);
        group.throughput(Throughput::Elements(network.route_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &network, |b, net| {
            b.iter(|| {
                shortest_path(net, &from, &to, courier_core::Criterion::Distance)
                    .expect("generated networks are connected")
            });
        });
    }
    group.finish();
}

fn bench_plan_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_route");
    let size = 1_000;
    let network = generate_network(size, DEGREE, BENCHMARK_SEED);
    for &count in STOP_COUNTS {
        let spacing = size.checked_div(count + 1).unwrap_or(1);
        let stops: Vec<String> = (1..=count).map(|n| location_id(n * spacing)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &stops, |b, targets| {
            b.iter(|| {
                plan_route(&network, "L00000", targets, courier_core::Criterion::Time)
                    .expect("generated networks are connected")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_plan_route);
criterion_main!(benches);
