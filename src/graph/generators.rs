use crate::graph::{DirectedGraph, GraphBuilder};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Weights are drawn uniformly from `1..=max_weight`. Self-loops are skipped.
/// The same `seed` always yields the same graph.
pub fn random_graph(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    let mut builder = GraphBuilder::new(n);
    if n < 2 {
        return builder.build();
    }
    let mut rng = StdRng::seed_from_u64(seed);

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            builder
                .add_edge(u, v, weight)
                .expect("generated edge is in range");
        }
    }

    builder.build()
}

/// Generates the path `0 -> 1 -> ... -> n-1` with the given costs
///
/// `costs[i]` is the weight of edge `i -> i + 1`; the graph has `costs.len() + 1` vertices.
pub fn chain(costs: &[u64]) -> DirectedGraph<u64> {
    let mut builder = GraphBuilder::new(costs.len() + 1);
    for (i, &cost) in costs.iter().enumerate() {
        builder
            .add_edge(i, i + 1, cost)
            .expect("chain edge is in range");
    }
    builder.build()
}

/// Generates a `width * height` grid with unit-cost edges in the four cardinal directions
pub fn grid(width: usize, height: usize) -> DirectedGraph<u64> {
    let mut builder = GraphBuilder::new(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let directions: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    builder
                        .add_edge(vertex, neighbor, 1)
                        .expect("grid edge is in range");
                }
            }
        }
    }

    builder.build()
}
