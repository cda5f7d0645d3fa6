use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::io::Read;

/// A directed graph implementation using adjacency lists.
///
/// Node identifiers are interned to dense indices; adjacency lists keep
/// edges in insertion order so neighbor iteration is deterministic.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Node identifier -> dense index
    index: HashMap<N, usize>,

    /// Dense index -> node identifier, in registration order
    labels: Vec<N>,

    /// Outgoing edges for each node: index -> [(target_index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            index: HashMap::new(),
            labels: Vec::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            index: HashMap::with_capacity(nodes),
            labels: Vec::with_capacity(nodes),
            outgoing_edges: Vec::with_capacity(nodes),
        }
    }

    /// Builds a graph from a node -> (neighbor -> weight) mapping.
    ///
    /// Every key is registered even when its inner mapping is empty, and
    /// every neighbor is registered as a node. The first invalid weight
    /// aborts construction.
    ///
    /// ```
    /// use sssp_engine::{DirectedGraph, Graph};
    ///
    /// let graph = DirectedGraph::from_adjacency([
    ///     ("A", vec![("B", 1.0), ("C", 4.0)]),
    ///     ("B", vec![("C", 2.0)]),
    /// ])
    /// .unwrap();
    /// assert_eq!(graph.node_count(), 3);
    /// assert!(DirectedGraph::from_adjacency([("A", vec![("B", -1.0)])]).is_err());
    /// ```
    pub fn from_adjacency<I, A>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (node, edges) in adjacency {
            graph.add_node(node.clone());
            for (next, weight) in edges {
                graph.add_edge(node.clone(), next, weight)?;
            }
        }
        Ok(graph)
    }

    /// Returns the dense index of a node, registering it if needed
    fn intern(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.labels.len();
        self.index.insert(node.clone(), idx);
        self.labels.push(node);
        self.outgoing_edges.push(Vec::new());
        idx
    }

    fn edges_of(&self, node: &N) -> Option<&[(usize, W)]> {
        self.index
            .get(node)
            .map(|&idx| self.outgoing_edges[idx].as_slice())
    }
}

/// Rejects negative, NaN and infinite weights
fn validate_weight<N, W>(from: &N, to: &N, weight: W) -> Result<()>
where
    N: Debug,
    W: Float + Debug,
{
    if weight.is_finite() && weight >= W::zero() {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        })
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId + Ord,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the graph as a sorted node -> (neighbor -> weight) mapping
    pub fn to_adjacency(&self) -> BTreeMap<N, BTreeMap<N, W>> {
        self.labels
            .iter()
            .zip(&self.outgoing_edges)
            .map(|(node, edges)| {
                let inner: BTreeMap<N, W> = edges
                    .iter()
                    .map(|&(target, weight)| (self.labels[target].clone(), weight))
                    .collect();
                (node.clone(), inner)
            })
            .collect()
    }
}

impl DirectedGraph<String, f64> {
    /// Parses a JSON object of the form `{"A": {"B": 1.5}, "B": {}}`.
    ///
    /// Keys are visited in sorted order, so node registration order does
    /// not depend on the layout of the document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let adjacency: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(json)?;
        Self::from_adjacency(adjacency)
    }

    /// Same as [`from_json_str`](Self::from_json_str), reading from any `Read`
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let adjacency: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_reader(reader)?;
        Self::from_adjacency(adjacency)
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.labels.iter())
    }

    fn has_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn outgoing_edges(&self, node: &N) -> Result<Box<dyn Iterator<Item = (&N, W)> + '_>> {
        let edges = self
            .edges_of(node)
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", node)))?;
        Ok(Box::new(
            edges
                .iter()
                .map(move |&(target, weight)| (&self.labels[target], weight)),
        ))
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        let target = *self.index.get(to)?;
        self.edges_of(from)?
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.has_node(&node) {
            return false;
        }
        self.intern(node);
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        validate_weight(&from, &to, weight)?;

        let from_idx = self.intern(from);
        let to_idx = self.intern(to);
        let outgoing = &mut self.outgoing_edges[from_idx];

        // Check if edge already exists and update it if it does
        match outgoing.iter_mut().find(|(target, _)| *target == to_idx) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to_idx, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let (Some(&from_idx), Some(&to_idx)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        let outgoing = &mut self.outgoing_edges[from_idx];
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to_idx);
        len_before > outgoing.len()
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> Result<bool> {
        validate_weight(from, to, weight)?;

        let (Some(&from_idx), Some(&to_idx)) = (self.index.get(from), self.index.get(to)) else {
            return Ok(false);
        };
        match self.outgoing_edges[from_idx]
            .iter_mut()
            .find(|(target, _)| *target == to_idx)
        {
            Some(edge) => {
                edge.1 = weight;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
