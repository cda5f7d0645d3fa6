//! SSSP Engine - single-source shortest paths over weighted directed graphs
//!
//! This library provides a generic weighted directed graph, a stable
//! binary-heap priority queue, a predecessor-walking path reconstructor and a
//! Dijkstra engine that ties them together.
//!
//! Edge weights must be finite and non-negative; graphs reject anything else
//! at construction time.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    engine::{EngineState, ShortestPathEngine},
    path::reconstruct_path,
    Cost, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::MinPriorityQueue;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge from {from} to {to}: weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Pop called on an empty priority queue")]
    EmptyQueue,

    #[error("No shortest-path search has completed yet")]
    NotReady,

    #[error("Node {0} is not reachable from the source")]
    Unreachable(String),

    #[error("Predecessor chain starting at {0} does not terminate")]
    CorruptPredecessors(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
