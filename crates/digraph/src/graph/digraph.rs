//! Main Digraph interface for graph operations.

use super::types::{Direction, Node, NodeId};
use crate::error::{GraphError, Operation, Result};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// A directed graph of uniquely identified nodes.
///
/// `Digraph` owns every [`Node`] it creates. Each arc is recorded twice, in
/// the source's outgoing set and in the target's incoming set, and every
/// public operation keeps the two sides in agreement. Queries return owned
/// data rather than references into the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<I: Ord> {
    nodes: BTreeMap<I, Node<I>>,
}

impl<I: Ord> Default for Digraph<I> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<I: NodeId> Digraph<I> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of arcs, creating endpoints as they appear.
    ///
    /// Repeated arcs collapse into one.
    pub fn from_arcs<A>(arcs: A) -> Self
    where
        A: IntoIterator<Item = (I, I)>,
    {
        let mut graph = Self::new();
        for (from, to) in arcs {
            graph.ensure_node(from.clone());
            graph.ensure_node(to.clone());
            graph.link(from, to);
        }
        graph
    }

    /// Add a node with no arcs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: I) -> Result<(), I> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        debug!("Adding node: id={id:?}");
        self.nodes.insert(id.clone(), Node::new(id));
        Ok(())
    }

    /// Add multiple nodes in an atomic batch operation.
    ///
    /// Either all nodes are added or none are.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if any id is already present or
    /// appears twice in the batch.
    pub fn add_nodes<N>(&mut self, ids: N) -> Result<(), I>
    where
        N: IntoIterator<Item = I>,
    {
        let mut batch = BTreeSet::new();
        for id in ids {
            if self.nodes.contains_key(&id) || batch.contains(&id) {
                return Err(GraphError::DuplicateNode { id });
            }
            batch.insert(id);
        }

        debug!("Adding batch of {} nodes", batch.len());
        for id in batch {
            self.nodes.insert(id.clone(), Node::new(id));
        }
        Ok(())
    }

    /// Delete a node and every arc touching it.
    ///
    /// In-neighbors lose their outgoing entry for `id` and out-neighbors lose
    /// their incoming entry, so no dangling identifiers remain. A self-loop
    /// is dropped along with the node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn delete_node(&mut self, id: &I) -> Result<(), I> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| GraphError::not_found(id.clone(), Operation::DeleteNode))?;
        debug!(
            "Deleting node: id={id:?}, in_degree={}, out_degree={}",
            node.in_degree(),
            node.out_degree()
        );

        for predecessor in &node.incoming {
            if let Some(other) = self.nodes.get_mut(predecessor) {
                trace!("Unlinking {predecessor:?} -> {id:?}");
                other.outgoing.remove(id);
            }
        }
        for successor in &node.outgoing {
            if let Some(other) = self.nodes.get_mut(successor) {
                trace!("Unlinking {id:?} -> {successor:?}");
                other.incoming.remove(id);
            }
        }

        Ok(())
    }

    /// Add an arc `from -> to`.
    ///
    /// Adding an arc that already exists is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the arc was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist
    /// (`from` is checked first).
    pub fn add_arc(&mut self, from: &I, to: &I) -> Result<bool, I> {
        self.require(from, Operation::AddArc)?;
        self.require(to, Operation::AddArc)?;

        let inserted = self.link(from.clone(), to.clone());
        if inserted {
            debug!("Adding arc: {from:?} -> {to:?}");
        }
        Ok(inserted)
    }

    /// Add multiple arcs in an atomic batch operation.
    ///
    /// Every endpoint is verified before any arc is inserted.
    ///
    /// # Returns
    ///
    /// The number of arcs that did not exist before.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] for the first missing endpoint.
    pub fn add_arcs<A>(&mut self, arcs: A) -> Result<usize, I>
    where
        A: IntoIterator<Item = (I, I)>,
    {
        let arcs: Vec<(I, I)> = arcs.into_iter().collect();
        for (from, to) in &arcs {
            self.require(from, Operation::AddArc)?;
            self.require(to, Operation::AddArc)?;
        }

        debug!("Adding batch of {} arcs", arcs.len());
        let inserted = arcs
            .into_iter()
            .filter(|(from, to)| self.link(from.clone(), to.clone()))
            .count();
        trace!("{inserted} arcs were new");
        Ok(inserted)
    }

    /// Delete the arc `from -> to`.
    ///
    /// Deleting an arc that doesn't exist between two existing nodes is a
    /// no-op.
    ///
    /// # Returns
    ///
    /// `true` if an arc was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist.
    pub fn delete_arc(&mut self, from: &I, to: &I) -> Result<bool, I> {
        self.require(from, Operation::DeleteArc)?;
        self.require(to, Operation::DeleteArc)?;

        let removed = self
            .nodes
            .get_mut(from)
            .is_some_and(|node| node.outgoing.remove(to));
        if let Some(node) = self.nodes.get_mut(to) {
            node.incoming.remove(from);
        }
        if removed {
            debug!("Deleting arc: {from:?} -> {to:?}");
        }
        Ok(removed)
    }

    /// Check whether the arc `from -> to` exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist.
    pub fn check_arc(&self, from: &I, to: &I) -> Result<bool, I> {
        let node = self.require(from, Operation::CheckArc)?;
        self.require(to, Operation::CheckArc)?;
        Ok(node.outgoing.contains(to))
    }

    /// Number of arcs leaving `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_degree(&self, id: &I) -> Result<usize, I> {
        Ok(self.require(id, Operation::OutDegree)?.out_degree())
    }

    /// Number of arcs entering `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn in_degree(&self, id: &I) -> Result<usize, I> {
        Ok(self.require(id, Operation::InDegree)?.in_degree())
    }

    /// Get all neighbors of `id` in the specified direction.
    ///
    /// # Returns
    ///
    /// Neighbor identifiers in ascending order, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, id: &I, direction: Direction) -> Result<Vec<I>, I> {
        let node = self.require(id, Operation::Neighbors)?;
        let neighbors: BTreeSet<&I> = node.adjacent(direction).collect();
        Ok(neighbors.into_iter().cloned().collect())
    }

    /// Owned snapshot of a single node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node(&self, id: &I) -> Result<Node<I>, I> {
        self.require(id, Operation::GetNode).cloned()
    }

    /// Whether a node with this identifier exists.
    pub fn contains_node(&self, id: &I) -> bool {
        self.nodes.contains_key(id)
    }

    /// All node identifiers in ascending order.
    pub fn node_ids(&self) -> Vec<I> {
        self.nodes.keys().cloned().collect()
    }

    /// All arcs as `(from, to)` pairs in ascending order.
    pub fn arcs(&self) -> Vec<(I, I)> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.outgoing
                    .iter()
                    .map(move |to| (node.id.clone(), to.clone()))
            })
            .collect()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of arcs in the graph.
    pub fn arc_count(&self) -> usize {
        self.nodes.values().map(Node::out_degree).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and arcs from the graph.
    pub fn clear(&mut self) {
        debug!("Clearing graph with {} nodes", self.nodes.len());
        self.nodes.clear();
    }

    /// Verify that every arc is recorded on both of its endpoints.
    ///
    /// Returns `false` if some adjacency set names a missing node or an arc
    /// is only present on one side.
    pub fn is_consistent(&self) -> bool {
        self.nodes.iter().all(|(id, node)| {
            node.id == *id
                && node.outgoing.iter().all(|to| {
                    self.nodes
                        .get(to)
                        .is_some_and(|other| other.incoming.contains(id))
                })
                && node.incoming.iter().all(|from| {
                    self.nodes
                        .get(from)
                        .is_some_and(|other| other.outgoing.contains(id))
                })
        })
    }

    // ===== Algorithm Methods =====

    /// Breadth-first traversal along outgoing arcs.
    ///
    /// # Returns
    ///
    /// Every node reachable from `root`, starting with `root`, in the order
    /// they were discovered.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `root` doesn't exist.
    pub fn bf_search(&self, root: &I) -> Result<Vec<I>, I> {
        super::algorithms::bf_search(self, root, Direction::Outgoing)
    }

    /// Breadth-first traversal following arcs in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `root` doesn't exist.
    pub fn bf_search_directed(&self, root: &I, direction: Direction) -> Result<Vec<I>, I> {
        super::algorithms::bf_search(self, root, direction)
    }

    /// Depth-first traversal along outgoing arcs, in post-order.
    ///
    /// # Returns
    ///
    /// Every node reachable from `root`; each node appears after all nodes
    /// first discovered below it, and `root` comes last.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `root` doesn't exist.
    pub fn df_search(&self, root: &I) -> Result<Vec<I>, I> {
        super::algorithms::df_search(self, root, Direction::Outgoing)
    }

    /// Post-order depth-first traversal following arcs in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `root` doesn't exist.
    pub fn df_search_directed(&self, root: &I, direction: Direction) -> Result<Vec<I>, I> {
        super::algorithms::df_search(self, root, direction)
    }

    // ===== Export Methods =====

    /// Export graph to Graphviz DOT format for visualization.
    ///
    /// **Warning**: Large graphs (>10K nodes) will produce warnings.
    /// Graphs over 100K nodes will fail.
    pub fn export_dot(&self) -> Result<String, I> {
        crate::export::export_dot(self)
    }

    /// Export graph to Graphviz DOT format with custom styling options.
    pub fn export_dot_styled(&self, options: &crate::export::DotOptions<I>) -> Result<String, I> {
        crate::export::export_dot_styled(self, options)
    }

    /// Export graph to D3.js-compatible JSON format.
    ///
    /// **Warning**: Large graphs (>10K nodes) will produce warnings.
    /// Graphs over 100K nodes will fail.
    pub fn export_json(&self) -> Result<String, I>
    where
        I: serde::Serialize,
    {
        crate::export::export_json(self)
    }

    // Crate-internal helpers

    /// Look up a node, reporting `operation` if it is missing.
    pub(crate) fn require(&self, id: &I, operation: Operation) -> Result<&Node<I>, I> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::not_found(id.clone(), operation))
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<I>> {
        self.nodes.values()
    }

    fn ensure_node(&mut self, id: I) {
        self.nodes
            .entry(id)
            .or_insert_with_key(|id| Node::new(id.clone()));
    }

    /// Record `from -> to` on both endpoints. Both must exist.
    fn link(&mut self, from: I, to: I) -> bool {
        let inserted = self
            .nodes
            .get_mut(&from)
            .is_some_and(|node| node.outgoing.insert(to.clone()));
        if let Some(node) = self.nodes.get_mut(&to) {
            node.incoming.insert(from);
        }
        inserted
    }
}
