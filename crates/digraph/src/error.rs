//! Error types for digraph operations.
//!
//! All fallible operations return [`Result<T, I>`], where `I` is the node
//! identifier type. Errors carry the offending identifier so callers can match
//! on it directly; the `Display` output is only meant for humans.

use std::fmt;
use thiserror::Error;

/// Result type alias for digraph operations over identifiers of type `I`.
pub type Result<T, I> = std::result::Result<T, GraphError<I>>;

/// Error type for all graph operations.
///
/// A failing operation never leaves a partial mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<I> {
    /// An operation referenced an identifier that is not in the graph
    #[error("Node not found: {id:?} (during {operation})")]
    NodeNotFound {
        /// Identifier that was looked up
        id: I,
        /// Operation that performed the lookup
        operation: Operation,
    },

    /// `add_node` was called with an identifier that already exists
    #[error("Duplicate node: {id:?} already exists")]
    DuplicateNode {
        /// Identifier that is already taken
        id: I,
    },

    /// Serialization error while rendering an export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
    },

    /// Invalid operation (e.g., exporting an oversized graph)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },
}

impl<I> GraphError<I> {
    /// Create a not-found error for `id` raised by `operation`.
    pub fn not_found(id: I, operation: Operation) -> Self {
        Self::NodeNotFound { id, operation }
    }

    /// Create a serialization error from a message and the underlying error.
    pub fn serialization(message: impl Into<String>, source: impl fmt::Display) -> Self {
        Self::Serialization {
            message: format!("{}: {source}", message.into()),
        }
    }

    /// Returns the identifier this error is about, if any.
    pub fn id(&self) -> Option<&I> {
        match self {
            Self::NodeNotFound { id, .. } | Self::DuplicateNode { id } => Some(id),
            Self::Serialization { .. } | Self::InvalidOperation { .. } => None,
        }
    }
}

/// Graph operation that raised a [`GraphError::NodeNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Digraph::add_arc`](crate::Digraph::add_arc) and its batch form
    AddArc,
    /// [`Digraph::delete_node`](crate::Digraph::delete_node)
    DeleteNode,
    /// [`Digraph::delete_arc`](crate::Digraph::delete_arc)
    DeleteArc,
    /// [`Digraph::check_arc`](crate::Digraph::check_arc)
    CheckArc,
    /// [`Digraph::out_degree`](crate::Digraph::out_degree)
    OutDegree,
    /// [`Digraph::in_degree`](crate::Digraph::in_degree)
    InDegree,
    /// Breadth-first search
    BfSearch,
    /// Depth-first search
    DfSearch,
    /// [`Digraph::neighbors`](crate::Digraph::neighbors)
    Neighbors,
    /// [`Digraph::node`](crate::Digraph::node)
    GetNode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::AddArc => write!(f, "add_arc"),
            Operation::DeleteNode => write!(f, "delete_node"),
            Operation::DeleteArc => write!(f, "delete_arc"),
            Operation::CheckArc => write!(f, "check_arc"),
            Operation::OutDegree => write!(f, "out_degree"),
            Operation::InDegree => write!(f, "in_degree"),
            Operation::BfSearch => write!(f, "bf_search"),
            Operation::DfSearch => write!(f, "df_search"),
            Operation::Neighbors => write!(f, "neighbors"),
            Operation::GetNode => write!(f, "node"),
        }
    }
}
