//! Export module for visualizing graphs in external tools.
//!
//! Supports two formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;

use crate::error::{GraphError, Result};
use log::warn;

/// Node count above which exports log a warning.
pub const WARN_NODE_LIMIT: usize = 10_000;

/// Node count above which exports are refused.
pub const MAX_NODE_LIMIT: usize = 100_000;

/// Check graph size for export operations and issue warnings/errors.
pub(crate) fn check_export_size<I>(node_count: usize) -> Result<(), I> {
    if node_count > MAX_NODE_LIMIT {
        return Err(GraphError::InvalidOperation {
            message: format!(
                "Graph too large for export ({node_count} nodes > 100K limit). Export a subgraph instead."
            ),
        });
    }

    if node_count > WARN_NODE_LIMIT {
        warn!("Exporting large graph ({node_count} nodes)");
    }

    Ok(())
}
