//! Core graph types: the node record, identifier bound and directions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every type usable as a node identifier.
///
/// Ordering keeps storage and traversal output deterministic; `Debug` is used
/// for error messages and exports.
pub trait NodeId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> NodeId for T {}

/// Direction for neighbor queries and traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing arcs (from this node)
    Outgoing,
    /// Follow incoming arcs (to this node)
    Incoming,
    /// Follow arcs in both directions
    Both,
}

/// A node in the digraph.
///
/// Holds the identifier together with the identifiers of its in- and
/// out-neighbors. The record performs no validation; keeping both sides of
/// every arc in sync is the job of [`Digraph`](crate::Digraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<I: Ord> {
    pub(crate) id: I,
    pub(crate) incoming: BTreeSet<I>,
    pub(crate) outgoing: BTreeSet<I>,
}

impl<I: Ord> Node<I> {
    /// Create a node with empty adjacency sets.
    pub fn new(id: I) -> Self {
        Self {
            id,
            incoming: BTreeSet::new(),
            outgoing: BTreeSet::new(),
        }
    }

    /// Identifier of this node.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Identifiers of nodes with an arc pointing to this node.
    pub fn incoming(&self) -> &BTreeSet<I> {
        &self.incoming
    }

    /// Identifiers of nodes this node points to.
    pub fn outgoing(&self) -> &BTreeSet<I> {
        &self.outgoing
    }

    /// Number of in-neighbors.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of out-neighbors.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Whether this node has an arc to itself.
    pub fn has_self_loop(&self) -> bool {
        self.outgoing.contains(&self.id)
    }

    /// Neighbor identifiers in the given direction.
    ///
    /// For [`Direction::Both`] an identifier that is both an in- and an
    /// out-neighbor is yielded twice.
    pub(crate) fn adjacent(&self, direction: Direction) -> Box<dyn Iterator<Item = &I> + '_> {
        match direction {
            Direction::Outgoing => Box::new(self.outgoing.iter()),
            Direction::Incoming => Box::new(self.incoming.iter()),
            Direction::Both => Box::new(self.outgoing.iter().chain(self.incoming.iter())),
        }
    }
}
