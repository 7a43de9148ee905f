//! # digraph
//!
//! An in-memory directed graph container with uniquely identified nodes,
//! directed arcs, degree queries and reachability traversals.
//!
//! ## Core Principles
//!
//! - **Consistent Adjacency**: every arc is recorded on both endpoints, always
//! - **Owned Results**: queries hand back copies, never handles into storage
//! - **Deterministic**: ordered storage makes traversal output reproducible
//! - **Fail Fast**: a failing operation leaves the graph untouched
//!
//! ## Architecture
//!
//! ```text
//! Export (DOT, JSON)
//!     ↓
//! Algorithms (BFS, post-order DFS)
//!     ↓
//! Digraph (nodes, arcs, degrees)
//!     ↓
//! Node record (id, incoming, outgoing)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use digraph::Digraph;
//!
//! # fn example() -> digraph::Result<(), char> {
//! let mut graph = Digraph::new();
//! for id in ['a', 'b', 'c', 'd'] {
//!     graph.add_node(id)?;
//! }
//! graph.add_arc(&'a', &'b')?;
//! graph.add_arc(&'a', &'c')?;
//! graph.add_arc(&'b', &'d')?;
//! graph.add_arc(&'c', &'d')?;
//!
//! assert_eq!(graph.bf_search(&'a')?, vec!['a', 'b', 'c', 'd']);
//! assert_eq!(graph.df_search(&'a')?, vec!['d', 'b', 'c', 'a']);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Operation, Result};
pub use export::DotOptions;
pub use graph::{Digraph, Direction, Node, NodeId};
