use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Cost, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Lifecycle of a [`ShortestPathEngine`].
///
/// A search runs to completion inside `compute_from`, so there is no
/// observable in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No search has completed yet
    Unstarted,
    /// The last search finished and its results can be queried
    Done,
}

/// Stateful shortest-path engine bound to one graph.
///
/// The engine borrows the graph for its whole lifetime, so the graph cannot
/// be mutated while the engine holds results computed from it. Each engine
/// owns its result maps; run independent searches on separate engines.
///
/// ```
/// use sssp_engine::{Cost, DirectedGraph, ShortestPathEngine};
///
/// let graph = DirectedGraph::from_adjacency([
///     ("A", vec![("B", 1.0), ("C", 4.0)]),
///     ("B", vec![("C", 2.0)]),
/// ])
/// .unwrap();
///
/// let mut engine = ShortestPathEngine::new(&graph);
/// engine.compute_from(&"A").unwrap();
/// assert_eq!(engine.distance_to(&"C").unwrap(), Cost::Finite(3.0));
/// assert_eq!(engine.path_to(&"C").unwrap(), vec!["A", "B", "C"]);
/// ```
#[derive(Debug)]
pub struct ShortestPathEngine<'g, N, W, G, A = Dijkstra>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
    A: ShortestPathAlgorithm<N, W, G>,
{
    graph: &'g G,
    algorithm: A,
    /// Result of the last completed search
    result: Option<ShortestPathResult<N, W>>,
}

impl<'g, N, W, G> ShortestPathEngine<'g, N, W, G, Dijkstra>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Creates an engine running the default Dijkstra search
    pub fn new(graph: &'g G) -> Self {
        Self::with_algorithm(graph, Dijkstra::new())
    }
}

impl<'g, N, W, G, A> ShortestPathEngine<'g, N, W, G, A>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
    A: ShortestPathAlgorithm<N, W, G>,
{
    /// Creates an engine running a specific, configured algorithm
    pub fn with_algorithm(graph: &'g G, algorithm: A) -> Self {
        ShortestPathEngine {
            graph,
            algorithm,
            result: None,
        }
    }

    /// Runs a fresh search from `source`, replacing any previous results.
    ///
    /// An unknown source fails with `UnknownNode` and leaves the engine
    /// as it was.
    pub fn compute_from(&mut self, source: &N) -> Result<()> {
        if !self.graph.has_node(source) {
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }

        self.result = None;
        let result = self.algorithm.compute_shortest_paths(self.graph, source)?;
        debug!(
            "{} search from {:?} done: {} nodes reached",
            self.algorithm.name(),
            source,
            result.reached_count()
        );
        self.result = Some(result);
        Ok(())
    }

    /// Shortest distance from the source to `node`.
    ///
    /// Returns `Cost::Infinite` for a registered node the search never reached.
    pub fn distance_to(&self, node: &N) -> Result<Cost<W>> {
        let result = self.finished()?;
        self.ensure_known(node)?;
        Ok(result.distance(node))
    }

    /// Shortest path from the source to `node`, both ends included.
    pub fn path_to(&self, node: &N) -> Result<Vec<N>> {
        let result = self.finished()?;
        self.ensure_known(node)?;
        self.algorithm.get_path(result, node)
    }

    pub fn state(&self) -> EngineState {
        match self.result {
            Some(_) => EngineState::Done,
            None => EngineState::Unstarted,
        }
    }

    /// Source of the last completed search
    pub fn source(&self) -> Result<&N> {
        Ok(&self.finished()?.source)
    }

    /// Full result of the last completed search
    pub fn result(&self) -> Result<&ShortestPathResult<N, W>> {
        self.finished()
    }

    /// Nodes reached by the last search, in no particular order
    pub fn reached_nodes(&self) -> Result<impl Iterator<Item = &N> + '_> {
        Ok(self.finished()?.distances.keys())
    }

    pub fn stats(&self) -> Result<SearchStats> {
        Ok(self.finished()?.stats)
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    fn finished(&self) -> Result<&ShortestPathResult<N, W>> {
        self.result.as_ref().ok_or(Error::NotReady)
    }

    fn ensure_known(&self, node: &N) -> Result<()> {
        if self.graph.has_node(node) {
            Ok(())
        } else {
            Err(Error::UnknownNode(format!("{:?}", node)))
        }
    }
}
