pub mod traits;
pub mod dijkstra;
pub mod engine;
pub mod path;

pub use traits::{Cost, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
