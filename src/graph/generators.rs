//! Seeded graph generators for tests and benchmarks.
//!
//! All generators use integer node ids `0..n` and `f64` weights, and register
//! every node up front so isolated nodes are still part of the graph.

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a uniform random directed graph with `n` nodes and up to
/// `edge_count` edges, weights drawn from `weight_range`. Self-loops are skipped.
pub fn generate_random(
    n: usize,
    edge_count: usize,
    weight_range: std::ops::Range<f64>,
    seed: u64,
) -> Result<DirectedGraph<usize, f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(weight_range.clone());
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a Barabási-Albert scale-free graph with n nodes and m edges per new node
pub fn generate_barabasi_albert(n: usize, m: usize, seed: u64) -> Result<DirectedGraph<usize, f64>> {
    if m == 0 || n <= m {
        return Err(Error::InvalidParameter(format!(
            "barabasi-albert needs 0 < m < n, got n={} m={}",
            n, m
        )));
    }

    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    // Initial complete graph on m nodes
    for i in 0..m {
        graph.add_node(i);
    }
    for i in 0..m {
        for j in 0..m {
            if i != j && !graph.has_edge(&i, &j) {
                graph.add_edge(i, j, rng.gen_range(1.0..100.0))?;
            }
        }
    }

    // Degree of each node, for preferential attachment
    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        graph.add_node(i);
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut pick = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && pick >= degrees[target] {
                pick -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                graph.add_edge(i, target, rng.gen_range(1.0..100.0))?;
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with 4-neighbour edges of weight 1.0
/// in both directions. Node id is `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<usize, f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_node(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge(current, current + 1, 1.0)?;
                graph.add_edge(current + 1, current, 1.0)?;
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, 1.0)?;
                graph.add_edge(current + width, current, 1.0)?;
            }
        }
    }

    Ok(graph)
}
