use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wgraph::prelude::*;

/// `side` x `side` grid with a few long diagonals, weights in 1..=7.
fn grid_graph(side: u32) -> Graph {
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push(Edge::new(v, v + 1, f64::from((r * 7 + c * 3) % 7 + 1)));
            }
            if r + 1 < side {
                edges.push(Edge::new(v, v + side, f64::from((r * 5 + c) % 7 + 1)));
            }
            if r + 1 < side && c + 1 < side && (r + c) % 11 == 0 {
                edges.push(Edge::new(v, v + side + 1, 9.5));
            }
        }
    }
    Graph::build((side * side) as usize, &edges).expect("valid grid")
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");

    for side in [32u32, 128] {
        let g = grid_graph(side);
        let unchecked = g
            .clone()
            .with_config(EngineConfig::new().with_verification(false));

        group.bench_with_input(BenchmarkId::new("bfs", side), &g, |b, g| {
            b.iter(|| {
                let (mut depth, mut pred) = g.bfs_buffers();
                black_box(g.bfs(0, &mut depth, &mut pred).expect("bfs"))
            });
        });

        group.bench_with_input(BenchmarkId::new("component_count", side), &g, |b, g| {
            b.iter(|| black_box(g.component_count()));
        });

        group.bench_with_input(BenchmarkId::new("dijkstra", side), &g, |b, g| {
            let (mut dist, mut pred) = g.dijkstra_buffers();
            b.iter(|| {
                g.shortest_paths(0, &mut dist, &mut pred, true)
                    .expect("dijkstra");
                black_box(dist[dist.len() - 1])
            });
        });

        group.bench_with_input(
            BenchmarkId::new("dijkstra_unverified", side),
            &unchecked,
            |b, g| {
                let (mut dist, mut pred) = g.dijkstra_buffers();
                b.iter(|| {
                    g.shortest_paths(0, &mut dist, &mut pred, true)
                        .expect("dijkstra");
                    black_box(dist[dist.len() - 1])
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("kruskal", side), &g, |b, g| {
            b.iter(|| black_box(g.minimum_spanning_forest().expect("kruskal").total_weight));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
