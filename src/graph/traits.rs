use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::algorithm::Cost;
use crate::Result;

/// Bounds every node identifier must satisfy
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of registered nodes
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns every registered node, in registration order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns true if the node was registered, with or without edges
    fn has_node(&self, node: &N) -> bool;

    /// Returns an iterator over the outgoing edges of a node.
    ///
    /// Fails with `UnknownNode` for a node that was never registered; a
    /// registered node without edges yields an empty iterator.
    fn outgoing_edges(&self, node: &N) -> Result<Box<dyn Iterator<Item = (&N, W)> + '_>>;

    /// Returns the destinations reachable by one edge from `node`
    fn neighbors(&self, node: &N) -> Result<Vec<&N>> {
        Ok(self.outgoing_edges(node)?.map(|(next, _)| next).collect())
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Cost of the direct edge `node -> next`, `Cost::Infinite` if there is none
    fn cost(&self, node: &N, next: &N) -> Cost<W> {
        match self.edge_weight(node, next) {
            Some(weight) => Cost::Finite(weight),
            None => Cost::Infinite,
        }
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Registers a node with no outgoing edges. Returns false if it already existed.
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge, registering both endpoints.
    ///
    /// An existing edge has its weight replaced. Negative or non-finite
    /// weights fail with `InvalidWeight` and leave the graph unchanged.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()>;

    /// Removes an edge from the graph. Both endpoints stay registered.
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the weight of an existing edge. Returns Ok(false) if there is no such edge.
    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> Result<bool>;
}
