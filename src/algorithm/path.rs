use log::warn;

use crate::algorithm::PredecessorMap;
use crate::graph::NodeId;
use crate::{Error, Result};

/// Rebuilds the path from the search source to `goal`.
///
/// Follows predecessor links backward from `goal` until the source (the
/// entry mapped to `None`) and returns the nodes in source-to-goal order.
/// A goal missing from the map was never reached and yields `Unreachable`.
///
/// ```
/// use std::collections::HashMap;
/// use sssp_engine::reconstruct_path;
///
/// let predecessors = HashMap::from([("A", None), ("B", Some("A")), ("C", Some("B"))]);
/// assert_eq!(reconstruct_path(&predecessors, &"C").unwrap(), vec!["A", "B", "C"]);
/// assert_eq!(reconstruct_path(&predecessors, &"A").unwrap(), vec!["A"]);
/// assert!(reconstruct_path(&predecessors, &"D").is_err());
/// ```
pub fn reconstruct_path<N: NodeId>(predecessors: &PredecessorMap<N>, goal: &N) -> Result<Vec<N>> {
    let mut link = predecessors
        .get(goal)
        .ok_or_else(|| Error::Unreachable(format!("{:?}", goal)))?;

    let mut path = vec![goal.clone()];
    while let Some(prev) = link {
        // A well-formed tree never needs more hops than it has entries
        if path.len() > predecessors.len() {
            warn!("predecessor chain from {:?} revisits a node", goal);
            return Err(Error::CorruptPredecessors(format!("{:?}", goal)));
        }
        path.push(prev.clone());
        link = predecessors
            .get(prev)
            .ok_or_else(|| Error::CorruptPredecessors(format!("{:?}", goal)))?;
    }

    path.reverse();
    Ok(path)
}
