use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// Instead of a decrease-key operation, every improvement pushes a fresh
/// queue entry; entries whose priority is worse than the recorded distance
/// are skipped when popped.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Initial capacity of the frontier queue
    queue_capacity: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { queue_capacity: 0 }
    }

    /// Pre-size the frontier queue, useful when the graph size is known
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }

        debug!(
            "dijkstra from {:?} over {} nodes / {} edges",
            source,
            graph.node_count(),
            graph.edge_count()
        );

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: PredecessorMap<N> = HashMap::new();
        let mut stats = SearchStats::default();

        // Distance to source is 0
        distances.insert(source.clone(), W::zero());
        predecessors.insert(source.clone(), None);

        let mut queue = MinPriorityQueue::with_capacity(self.queue_capacity);
        queue.push(source.clone(), W::zero());
        stats.pushes += 1;

        while !queue.is_empty() {
            let (u, dist_u) = queue.pop()?;
            stats.pops += 1;

            // A cheaper entry for u was already settled
            if distances.get(&u).is_some_and(|&best| dist_u > best) {
                stats.stale_skips += 1;
                trace!("skipping stale entry {:?} at {:?}", u, dist_u);
                continue;
            }

            for (v, weight) in graph.outgoing_edges(&u)? {
                let candidate = dist_u + weight;
                // Overflowing sums are not real distances
                if !candidate.is_finite() {
                    trace!("dropping overflowing distance to {:?}", v);
                    continue;
                }

                let improves = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), candidate);
                    stats.relaxations += 1;
                    stats.pushes += 1;
                }
            }
        }

        debug!(
            "dijkstra from {:?} reached {} nodes ({:?})",
            source,
            distances.len(),
            stats
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            stats,
        })
    }
}
