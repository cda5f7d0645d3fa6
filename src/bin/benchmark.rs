use log::info;
use sssp_engine::graph::generators::generate_random;
use sssp_engine::{DirectedGraph, Graph, ShortestPathEngine};
use std::time::{Duration, Instant};

// Function to benchmark the engine on a graph
fn benchmark_engine(graph: &DirectedGraph<usize, f64>, source: usize) -> sssp_engine::Result<Duration> {
    println!("Running Dijkstra on graph with {} nodes...", graph.node_count());

    let mut engine = ShortestPathEngine::new(graph);
    let start = Instant::now();
    engine.compute_from(&source)?;
    let duration = start.elapsed();

    let stats = engine.stats()?;
    let reachable = engine.result()?.reached_count();
    println!("  - Found {} reachable nodes in {:?}", reachable, duration);
    info!(
        "pops={} stale={} relaxations={}",
        stats.pops, stats.stale_skips, stats.relaxations
    );

    Ok(duration)
}

fn main() -> sssp_engine::Result<()> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per node
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: heap-backed Dijkstra");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let edges = (size as f64 * edge_factor) as usize;
        let graph = generate_random(size, edges, 1.0..100.0, size as u64)?;

        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let duration = benchmark_engine(&graph, 0)?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12}", "Nodes", "Edges", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.2}",
            size,
            edges,
            duration.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
