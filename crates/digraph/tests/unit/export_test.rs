//! Unit tests for export functionality.
//!
//! Tests cover:
//! - export_dot() output validity
//! - export_dot_styled() with options
//! - export_json() D3.js compatibility

use digraph::{Digraph, DotOptions, GraphError};
use serde_json::Value;

// Helper to create test graph: a -> b, a -> c, c -> c
fn create_test_graph() -> digraph::Result<Digraph<String>, String> {
    let mut graph = Digraph::new();
    graph.add_nodes(["a".to_string(), "b".to_string(), "c".to_string()])?;
    graph.add_arc(&"a".to_string(), &"b".to_string())?;
    graph.add_arc(&"a".to_string(), &"c".to_string())?;
    graph.add_arc(&"c".to_string(), &"c".to_string())?;
    Ok(graph)
}

#[test]
fn test_export_dot_validity() {
    let graph = create_test_graph().unwrap();

    let dot = graph.export_dot().unwrap();

    assert!(dot.starts_with("digraph directed_graph {"));
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("n0 [label=\"\\\"a\\\"\""));
    assert!(dot.contains("n0 -> n1;"));
    assert!(dot.contains("n0 -> n2;"));
    assert!(dot.contains("n2 -> n2;"));
    assert!(dot.ends_with("}\n"));
    assert_eq!(dot.matches("->").count(), graph.arc_count());
}

#[test]
fn test_export_dot_styled() {
    let graph = Digraph::from_arcs([(1u32, 2), (2, 3)]);
    let reachable = graph.bf_search(&2).unwrap();

    let options = DotOptions {
        name: "reachability".to_string(),
        rankdir: "TB".to_string(),
        ..DotOptions::default()
    }
    .with_highlight(reachable);
    let dot = graph.export_dot_styled(&options).unwrap();

    assert!(dot.starts_with("digraph reachability {"));
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("n0 [label=\"1\", fillcolor=\"#E0E0E0\"];"));
    assert!(dot.contains("n1 [label=\"2\", fillcolor=\"#90CAF9\"];"));
    assert!(dot.contains("n2 [label=\"3\", fillcolor=\"#90CAF9\"];"));
}

#[test]
fn test_export_empty_graph() {
    let graph: Digraph<u32> = Digraph::new();

    let dot = graph.export_dot().unwrap();
    assert!(!dot.contains("->"));

    let json: Value = serde_json::from_str(&graph.export_json().unwrap()).unwrap();
    assert_eq!(json["nodes"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["links"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_export_json_d3_compatibility() {
    let graph = create_test_graph().unwrap();

    let json_str = graph.export_json().unwrap();
    let json: Value = serde_json::from_str(&json_str).unwrap();

    let nodes = json["nodes"].as_array().unwrap();
    let links = json["links"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(links.len(), 3);

    assert_eq!(nodes[0]["id"], "a");
    assert_eq!(nodes[0]["out_degree"], 2);
    assert_eq!(nodes[2]["in_degree"], 2);

    assert_eq!(links[0]["source"], "a");
    assert_eq!(links[0]["target"], "b");
    assert_eq!(links[2]["source"], "c");
    assert_eq!(links[2]["target"], "c");
}

#[test]
fn test_export_size_limit() {
    let mut graph = Digraph::new();
    graph.add_nodes(0..100_001u32).unwrap();

    assert!(matches!(
        graph.export_dot(),
        Err(GraphError::InvalidOperation { .. })
    ));
    assert!(matches!(
        graph.export_json(),
        Err(GraphError::InvalidOperation { .. })
    ));
}
