use dijkstra_sssp::graph::generators::random_graph;
use dijkstra_sssp::{Dijkstra, DirectedGraph, FrontierStrategy, Graph, ShortestPathAlgorithm};
use std::time::{Duration, Instant};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm(algorithm: &Dijkstra, graph: &DirectedGraph<u64>, source: usize) -> (Duration, Vec<u64>) {
    let name = <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(algorithm);
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - {} failed: {}", name, err);
            return (start.elapsed(), Vec::new());
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    (duration, result.distances)
}

fn main() {
    env_logger::init();

    // The rebuild frontier is quadratic, keep sizes small
    let graph_sizes = vec![100, 500, 1_000, 2_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: lazy vs rebuild frontier");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let lazy = Dijkstra::new().with_strategy(FrontierStrategy::Lazy);
    let rebuild = Dijkstra::new().with_strategy(FrontierStrategy::Rebuild);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, 100, size as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (lazy_time, lazy_distances) = benchmark_algorithm(&lazy, &graph, 0);
        let (rebuild_time, rebuild_distances) = benchmark_algorithm(&rebuild, &graph, 0);

        if lazy_distances != rebuild_distances {
            eprintln!("WARNING: strategies disagree on graph with {} vertices", size);
        }

        results.push((size, lazy_time, rebuild_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10}", "Vertices", "Lazy (us)", "Rebuild (us)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, lazy_time, rebuild_time) in &results {
        let speedup = rebuild_time.as_secs_f64() / lazy_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12} | {:<12} | {:<10.2}",
            size,
            lazy_time.as_micros(),
            rebuild_time.as_micros(),
            speedup
        );
    }
}
