//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: A node record with its in- and out-neighbors
//! - [`Digraph`]: The directed graph container
//! - [`algorithms`]: Breadth-first and depth-first traversals

mod types;
mod digraph;
pub mod algorithms;

pub use types::{Direction, Node, NodeId};
pub use digraph::Digraph;
