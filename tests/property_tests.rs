use rand::prelude::*;
use rand::rngs::StdRng;
use sssp_engine::graph::generators::{generate_grid, generate_random};
use sssp_engine::{Cost, DirectedGraph, Error, Graph, MutableGraph, ShortestPathEngine};

// Minimum path weight from `source` to every node by enumerating simple paths
fn brute_force(graph: &DirectedGraph<usize, f64>, source: usize) -> Vec<Option<f64>> {
    fn walk(
        graph: &DirectedGraph<usize, f64>,
        node: usize,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<f64>>,
    ) {
        if best[node].map_or(true, |b| cost < b) {
            best[node] = Some(cost);
        }
        for (&next, weight) in graph.outgoing_edges(&node).unwrap() {
            if !on_path[next] {
                on_path[next] = true;
                walk(graph, next, cost + weight, on_path, best);
                on_path[next] = false;
            }
        }
    }

    let n = graph.node_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    on_path[source] = true;
    walk(graph, source, 0.0, &mut on_path, &mut best);
    best
}

// Integer weights keep sums exact so distances compare with ==
fn integer_weight_graph(n: usize, edges: usize, seed: u64) -> DirectedGraph<usize, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::new();
    for v in 0..n {
        graph.add_node(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v, rng.gen_range(0..10) as f64).unwrap();
    }
    graph
}

#[test]
fn test_distances_match_brute_force() {
    for seed in 0..40 {
        let graph = integer_weight_graph(7, 14, seed);
        let expected = brute_force(&graph, 0);

        let mut engine = ShortestPathEngine::new(&graph);
        engine.compute_from(&0).unwrap();

        for node in 0..graph.node_count() {
            let actual = engine.distance_to(&node).unwrap();
            assert_eq!(actual, Cost::from(expected[node]), "seed {} node {}", seed, node);
        }
    }
}

#[test]
fn test_paths_are_valid_and_match_distances() {
    for seed in 0..10 {
        let graph = generate_random(200, 800, 0.5..20.0, seed).unwrap();
        let mut engine = ShortestPathEngine::new(&graph);
        engine.compute_from(&0).unwrap();

        for node in 0..graph.node_count() {
            match engine.distance_to(&node).unwrap() {
                Cost::Finite(distance) => {
                    let path = engine.path_to(&node).unwrap();
                    assert_eq!(path.first(), Some(&0));
                    assert_eq!(path.last(), Some(&node));

                    let total: f64 = path
                        .windows(2)
                        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).expect("path uses a missing edge"))
                        .sum();
                    assert!((total - distance).abs() < 1e-9, "seed {} node {}", seed, node);
                }
                Cost::Infinite => {
                    assert!(matches!(engine.path_to(&node), Err(Error::Unreachable(_))));
                }
            }
        }
    }
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (12, 9);
    let graph = generate_grid(width, height).unwrap();
    let mut engine = ShortestPathEngine::new(&graph);
    engine.compute_from(&0).unwrap();

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            assert_eq!(engine.distance_to(&node).unwrap(), Cost::Finite((x + y) as f64));
            assert_eq!(engine.path_to(&node).unwrap().len(), x + y + 1);
        }
    }
    let stats = engine.stats().unwrap();
    assert_eq!(stats.pops, stats.pushes);
}
