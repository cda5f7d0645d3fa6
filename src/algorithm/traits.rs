use std::collections::HashMap;
use std::fmt::{self, Debug, Display};

use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// An edge or path cost that may be infinite.
///
/// `Infinite` orders after every `Finite` value, so it can be compared
/// directly against real costs. It stands for "no such edge" when returned
/// by `Graph::cost` and for "not reached" when returned by a distance query.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost<W> {
    Finite(W),
    Infinite,
}

impl<W: Copy> Cost<W> {
    /// Returns the finite value, if any
    pub fn finite(&self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(*w),
            Cost::Infinite => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Cost::Infinite)
    }
}

impl<W> From<Option<W>> for Cost<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Cost::Finite(w),
            None => Cost::Infinite,
        }
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{}", w),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// Node -> the node it was reached from. The source maps to `None`.
pub type PredecessorMap<N> = HashMap<N, Option<N>>;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries popped from the priority queue
    pub pops: usize,
    /// Popped entries discarded because a cheaper distance was already known
    pub stale_skips: usize,
    /// Edges that improved a distance
    pub relaxations: usize,
    /// Entries pushed onto the priority queue, the seed included
    pub pushes: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Best distance from the source, for reached nodes only
    pub distances: HashMap<N, W>,

    /// Predecessors in the shortest path tree, for reached nodes only
    pub predecessors: PredecessorMap<N>,

    /// Source node
    pub source: N,

    /// Work done by the search
    pub stats: SearchStats,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `node`, `Cost::Infinite` if the search never reached it
    pub fn distance(&self, node: &N) -> Cost<W> {
        self.distances.get(node).copied().into()
    }

    pub fn is_reached(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of nodes reached, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&result.predecessors, target)
    }
}
