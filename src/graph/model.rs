// src/graph/model.rs
//! The dependency graph data model.
//!
//! Mirrors the upstream graph resource: each node record carries
//! `outgoingDependencies` and `incomingDependencies` lists whose edges name
//! a `resolvedPath`. Missing lists and missing targets mean "no edge", never
//! an error; unknown extra fields are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A file-to-edges mapping keyed by node identifier.
///
/// Backed by a `BTreeMap` so every walk over the graph sees nodes in
/// lexicographic order, independent of input layout.
#[derive(Debug, Default, Deserialize)]
pub struct DependencyGraph(BTreeMap<String, NodeRecord>);

impl DependencyGraph {
    #[must_use]
    pub fn get(&self, node: &str) -> Option<&NodeRecord> {
        self.0.get(node)
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.0.contains_key(node)
    }

    /// Node identifiers in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Node identifiers with their records, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeRecord)> {
        self.0.iter().map(|(node, record)| (node.as_str(), record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One node's edge lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeRecord {
    pub outgoing_dependencies: Vec<OutgoingEdge>,
    pub incoming_dependencies: Vec<IncomingEdge>,
}

/// A directed dependency on another node. The target may be absent
/// (unresolvable import) or point outside the graph (dangling).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutgoingEdge {
    pub resolved_path: Option<String>,
}

/// The reverse direction, consumed by entry-point detection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomingEdge {
    pub resolved_path: Option<String>,
}
