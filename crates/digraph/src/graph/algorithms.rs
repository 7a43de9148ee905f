//! Graph traversal algorithms.
//!
//! Provides breadth-first and post-order depth-first reachability searches.
//! Neither recurses: BFS walks its own output as a queue and DFS keeps an
//! explicit stack of frames, so graph depth never touches the call stack.

use crate::error::{Operation, Result};
use crate::graph::{Digraph, Direction, NodeId};
use log::trace;
use std::collections::BTreeSet;

/// Breadth-First Search traversal from a starting node.
///
/// The output sequence doubles as the frontier queue: it is seeded with
/// `root` and grows while an index walks it. Neighbors of a node are visited
/// in ascending identifier order.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `root`: Starting node ID
/// - `direction`: Follow outgoing, incoming or both kinds of arcs
///
/// # Returns
/// Vec of reachable node IDs in discovery order, starting with `root`
///
/// # Errors
/// [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if `root`
/// is not in the graph.
pub fn bf_search<I: NodeId>(
    graph: &Digraph<I>,
    root: &I,
    direction: Direction,
) -> Result<Vec<I>, I> {
    graph.require(root, Operation::BfSearch)?;
    trace!("Starting BFS from {root:?} ({direction:?})");

    let mut visited = BTreeSet::from([root.clone()]);
    let mut order = vec![root.clone()];
    let mut index = 0;

    while index < order.len() {
        let current = graph.require(&order[index], Operation::BfSearch)?;
        for neighbor in current.adjacent(direction) {
            if visited.insert(neighbor.clone()) {
                order.push(neighbor.clone());
            }
        }
        index += 1;
    }

    trace!("BFS from {root:?} reached {} nodes", order.len());
    Ok(order)
}

/// Depth-First Search traversal from a starting node, in post-order.
///
/// Each stack frame pairs a node with the iterator over its remaining
/// neighbors. A node is marked when its frame is pushed and emitted when its
/// iterator runs dry.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `root`: Starting node ID
/// - `direction`: Follow outgoing, incoming or both kinds of arcs
///
/// # Returns
/// Vec of reachable node IDs in post-order, ending with `root`
///
/// # Errors
/// [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if `root`
/// is not in the graph.
pub fn df_search<I: NodeId>(
    graph: &Digraph<I>,
    root: &I,
    direction: Direction,
) -> Result<Vec<I>, I> {
    let start = graph.require(root, Operation::DfSearch)?;
    trace!("Starting DFS from {root:?} ({direction:?})");

    let mut traversed = BTreeSet::from([root.clone()]);
    let mut order = Vec::new();
    let mut stack = vec![(root.clone(), start.adjacent(direction))];

    while let Some((_, neighbors)) = stack.last_mut() {
        match neighbors.find(|neighbor| !traversed.contains(*neighbor)) {
            Some(next) => {
                traversed.insert(next.clone());
                let node = graph.require(next, Operation::DfSearch)?;
                stack.push((next.clone(), node.adjacent(direction)));
            }
            None => {
                if let Some((finished, _)) = stack.pop() {
                    order.push(finished);
                }
            }
        }
    }

    trace!("DFS from {root:?} reached {} nodes", order.len());
    Ok(order)
}
