//! # Search Benchmarks
//!
//! Performance benchmarks for the wayfind-core search modes.
//!
//! Run with: `cargo bench -p wayfind-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wayfind_core::{
    Discipline, Edge, Frontier, Graph, Node, PathRecord, SearchMode, SearchRequest, find_path,
    load_graph, mirror_edges,
};

fn cell(row: u32, col: u32) -> String {
    format!("r{row}c{col}")
}

/// Create a two-way grid of `side * side` nodes with varied road lengths.
fn create_grid_graph(side: u32) -> Graph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for row in 0..side {
        for col in 0..side {
            nodes.push(Node::new(cell(row, col), f64::from(col), f64::from(row)));
            let weight = 1.0 + f64::from((row * 7 + col * 3) % 5);
            if col + 1 < side {
                edges.push(Edge::new(cell(row, col), cell(row, col + 1), weight));
            }
            if row + 1 < side {
                edges.push(Edge::new(cell(row, col), cell(row + 1, col), weight));
            }
        }
    }

    Graph::from_parts(nodes, mirror_edges(edges)).expect("grid")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_modes_on_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_corner_to_corner");

    for side in [10u32, 20].iter() {
        let graph = create_grid_graph(*side);
        let end = cell(side - 1, side - 1);

        for mode in [
            SearchMode::AStar,
            SearchMode::Ucs,
            SearchMode::Gs,
            SearchMode::Bfs,
            SearchMode::Dfs,
        ] {
            let request = SearchRequest::new("r0c0", end.as_str(), mode);
            group.bench_with_input(BenchmarkId::new(mode.name(), side), &request, |b, request| {
                b.iter(|| black_box(find_path(&graph, request)));
            });
        }
    }

    group.finish();
}

fn bench_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("ids");

    for side in [4u32, 6].iter() {
        let graph = create_grid_graph(*side);
        let end = cell(side - 1, side - 1);
        let request = SearchRequest::new("r0c0", end.as_str(), SearchMode::Ids)
            .with_depth_limit(usize::try_from(2 * side).expect("bound"));

        group.bench_with_input(BenchmarkId::from_parameter(side), &request, |b, request| {
            b.iter(|| black_box(find_path(&graph, request)));
        });
    }

    group.finish();
}

fn bench_romania(c: &mut Criterion) {
    let graph = load_graph(
        include_str!("../../../data/romania_nodes.json"),
        include_str!("../../../data/romania_edges.json"),
        true,
    )
    .expect("romania");

    let mut group = c.benchmark_group("romania_lugoj_neamt");
    for mode in SearchMode::ALL {
        let request = SearchRequest::new("Lugoj", "Neamt", mode).with_depth_limit(10);
        group.bench_with_input(BenchmarkId::from_parameter(mode), &request, |b, request| {
            b.iter(|| black_box(find_path(&graph, request)));
        });
    }
    group.finish();
}

fn bench_frontier_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_insert");

    for size in [100u32, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut frontier = Frontier::new(Discipline::Descending);
                for i in 0..size {
                    let mut record = PathRecord::root("n");
                    record.f = f64::from((i * 7919) % 1000);
                    frontier.insert(record);
                }
                black_box(frontier)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_modes_on_grid,
    bench_ids,
    bench_romania,
    bench_frontier_insert,
);

criterion_main!(benches);
