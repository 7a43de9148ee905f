//! DOT format export for Graphviz visualization.
//!
//! Generates Graphviz DOT format for rendering graphs as images or interactive visualizations.
//! Graphviz statements use positional names (`n0`, `n1`, ...) and the node's
//! `Debug` form as its label, so any identifier type renders safely.

use super::check_export_size;
use crate::{Digraph, NodeId, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions<I> {
    /// Name written after the `digraph` keyword
    pub name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Fill color for regular nodes (hex color code)
    pub node_color: String,
    /// Nodes drawn with `highlight_color`, e.g. a traversal result
    pub highlight: BTreeSet<I>,
    /// Fill color for highlighted nodes (hex color code)
    pub highlight_color: String,
}

impl<I: Ord> Default for DotOptions<I> {
    fn default() -> Self {
        DotOptions {
            name: "directed_graph".to_string(),
            rankdir: "LR".to_string(),
            node_color: "#E0E0E0".to_string(),
            highlight: BTreeSet::new(),
            highlight_color: "#90CAF9".to_string(),
        }
    }
}

impl<I: Ord> DotOptions<I> {
    /// Highlight the given nodes.
    pub fn with_highlight(mut self, ids: impl IntoIterator<Item = I>) -> Self {
        self.highlight.extend(ids);
        self
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<I: NodeId>(graph: &Digraph<I>) -> Result<String, I> {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled<I: NodeId>(
    graph: &Digraph<I>,
    options: &DotOptions<I>,
) -> Result<String, I> {
    check_export_size::<I>(graph.node_count())?;

    let mut output = String::new();
    let names: BTreeMap<&I, usize> = graph
        .nodes()
        .enumerate()
        .map(|(position, node)| (node.id(), position))
        .collect();

    // Header
    output.push_str(&format!("digraph {} {{\n", escape_dot_id(&options.name)));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for (position, node) in graph.nodes().enumerate() {
        let label = escape_dot_label(&format!("{:?}", node.id()));
        let color = if options.highlight.contains(node.id()) {
            &options.highlight_color
        } else {
            &options.node_color
        };
        output.push_str(&format!(
            "    n{position} [label=\"{label}\", fillcolor=\"{color}\"];\n"
        ));
    }

    output.push('\n');

    for node in graph.nodes() {
        for target in node.outgoing() {
            if let (Some(from), Some(to)) = (names.get(node.id()), names.get(target)) {
                output.push_str(&format!("    n{from} -> n{to};\n"));
            }
        }
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a graph name unless it is a plain DOT identifier
fn escape_dot_id(s: &str) -> String {
    const KEYWORDS: [&str; 6] = ["strict", "graph", "digraph", "node", "edge", "subgraph"];
    let plain = !s.is_empty()
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s))
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        s.to_string()
    } else {
        format!("\"{}\"", escape_dot_label(s))
    }
}
