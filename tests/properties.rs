use dijkstra_sssp::graph::generators::{chain, grid, random_graph};
use dijkstra_sssp::{
    Dijkstra, DirectedGraph, FrontierStrategy, Graph, ShortestPathAlgorithm, ShortestPathEngine,
    ShortestPathResult,
};
use std::collections::HashSet;

fn check_invariants(graph: &DirectedGraph<u64>, result: &ShortestPathResult<u64>) {
    let n = graph.vertex_count();
    let source = result.source;
    assert_eq!(result.distances.len(), n);
    assert_eq!(result.parents.len(), n);
    assert_eq!(result.distances[source], 0);
    assert_eq!(result.parents[source], None);

    for v in 0..n {
        if !result.is_reachable(v) {
            assert_eq!(result.distances[v], u64::MAX, "unreachable {} must stay infinite", v);
            assert_eq!(result.parents[v], None, "unreachable {} must have no parent", v);
            continue;
        }

        let path = result.path_to(v).expect("reachable vertex must have a path");
        assert_eq!(path[0], source);
        assert_eq!(path[path.len() - 1], v);
        assert!(path.len() <= n);

        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "parent chain from {} repeats a vertex", v);

        let cost: u64 = path
            .windows(2)
            .map(|hop| graph.get_edge_weight(hop[0], hop[1]).expect("path uses a missing edge"))
            .sum();
        assert_eq!(cost, result.distances[v], "path cost to {} differs from its distance", v);
    }

    // No edge can still be relaxed
    for u in 0..n {
        if let Some(dist_u) = result.distance(u) {
            for (v, weight) in graph.outgoing_edges(u) {
                assert!(
                    result.distances[v] <= dist_u + weight,
                    "edge {} -> {} still relaxes",
                    u,
                    v
                );
            }
        }
    }
}

#[test]
fn test_random_graphs_satisfy_shortest_path_invariants() {
    for seed in 0..25 {
        let graph = random_graph(40, 2.0, 20, seed);
        let source = (seed as usize) % graph.vertex_count();

        let lazy = Dijkstra::new()
            .compute_shortest_paths(&graph, source)
            .unwrap();
        check_invariants(&graph, &lazy);
    }
}

#[test]
fn test_strategies_agree_on_random_graphs() {
    let lazy = Dijkstra::new().with_strategy(FrontierStrategy::Lazy);
    let rebuild = Dijkstra::new().with_strategy(FrontierStrategy::Rebuild);

    for seed in 100..120 {
        let graph = random_graph(60, 3.0, 10, seed);
        let a = lazy.compute_shortest_paths(&graph, 0).unwrap();
        let b = rebuild.compute_shortest_paths(&graph, 0).unwrap();
        check_invariants(&graph, &b);
        assert_eq!(a, b, "strategies disagree for seed {}", seed);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = random_graph(80, 2.5, 5, 7);
    let first = ShortestPathEngine::new(&graph, 3).unwrap().process().unwrap();
    let second = ShortestPathEngine::new(&graph, 3).unwrap().process().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_distances_never_increase_between_steps() {
    for seed in 0..10 {
        let graph = random_graph(30, 3.0, 15, seed);
        let mut engine = ShortestPathEngine::new(&graph, 0).unwrap();
        let mut previous = engine.distances().to_vec();
        let mut steps = 0;

        while let Some(settled) = engine.step().unwrap() {
            steps += 1;
            for (v, (&now, &before)) in engine.distances().iter().zip(&previous).enumerate() {
                assert!(now <= before, "distance of {} increased", v);
                if engine.is_settled(v) && v != settled {
                    assert_eq!(now, before, "settled vertex {} changed", v);
                }
            }
            previous = engine.distances().to_vec();
        }

        assert_eq!(steps, graph.vertex_count(), "each vertex settles exactly once");
    }
}

#[test]
fn test_chain_generator_distances_are_prefix_sums() {
    let costs = [3, 1, 4, 1, 5, 9, 2, 6];
    let graph = chain(&costs);
    let result = ShortestPathEngine::new(&graph, 0).unwrap().process().unwrap();

    let mut expected = vec![0u64];
    for cost in costs {
        expected.push(expected[expected.len() - 1] + cost);
    }
    assert_eq!(result.distances, expected);
    check_invariants(&graph, &result);
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (7, 5);
    let graph = grid(width, height);
    let result = ShortestPathEngine::new(&graph, 0).unwrap().process().unwrap();

    for y in 0..height {
        for x in 0..width {
            assert_eq!(result.distances[y * width + x], (x + y) as u64);
        }
    }
    check_invariants(&graph, &result);
}
