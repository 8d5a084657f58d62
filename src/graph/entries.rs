// src/graph/entries.rs
//! Probable entry-point detection.
//!
//! A node nothing depends on is a probable entry point. A graph without any
//! usually means the import structure is fully cyclic.

use crate::graph::model::DependencyGraph;

/// Nodes with no incoming dependencies, in graph order.
#[must_use]
pub fn probable_entry_points(graph: &DependencyGraph) -> Vec<String> {
    graph
        .iter()
        .filter(|(_, record)| record.incoming_dependencies.is_empty())
        .map(|(node, _)| node.to_string())
        .collect()
}
