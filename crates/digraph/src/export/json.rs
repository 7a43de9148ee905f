//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.

use super::check_export_size;
use crate::{Digraph, GraphError, Node, NodeId, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
pub fn export_json<I>(graph: &Digraph<I>) -> Result<String, I>
where
    I: NodeId + Serialize,
{
    check_export_size::<I>(graph.node_count())?;

    let mut nodes_array = Vec::with_capacity(graph.node_count());
    let mut links_array = Vec::new();

    for node in graph.nodes() {
        nodes_array.push(node_to_json(node)?);
        let source = id_to_json(node.id())?;
        for target in node.outgoing() {
            let target = id_to_json(target)?;
            links_array.push(json!({
                "source": source.clone(),
                "target": target,
            }));
        }
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", e))
}

/// Convert node to JSON object
fn node_to_json<I>(node: &Node<I>) -> Result<Value, I>
where
    I: NodeId + Serialize,
{
    Ok(json!({
        "id": id_to_json(node.id())?,
        "in_degree": node.in_degree(),
        "out_degree": node.out_degree(),
    }))
}

fn id_to_json<I>(id: &I) -> Result<Value, I>
where
    I: NodeId + Serialize,
{
    serde_json::to_value(id)
        .map_err(|e| GraphError::serialization("Failed to serialize node id", e))
}
