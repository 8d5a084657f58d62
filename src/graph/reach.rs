// src/graph/reach.rs
//! Transitive reachability over the dependency graph.
//!
//! A node's indirect import count is the number of distinct nodes reachable
//! from it by following outgoing edges, restricted to targets that exist in
//! the graph. Each node is expanded at most once per run; an active-path set
//! short-circuits cycles.

use std::collections::{HashMap, HashSet};

use crate::graph::model::DependencyGraph;

/// One ranked node: identifier plus the size of its reachable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub file: String,
    pub indirect_imports: usize,
}

/// Traversal state: the memo table of finalized reachable sets plus the
/// order nodes were finalized in. Owned by one ranking run and discarded
/// with it.
#[derive(Debug, Default)]
pub struct ReachState {
    memo: HashMap<String, HashSet<String>>,
    finalized: Vec<String>,
}

impl ReachState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The finalized count for `node`, if its expansion has run.
    #[must_use]
    pub fn count(&self, node: &str) -> Option<usize> {
        self.memo.get(node).map(HashSet::len)
    }

    /// Computes the reachable set of `node`, starting a fresh traversal path.
    pub fn reachable(&mut self, graph: &DependencyGraph, node: &str) -> HashSet<String> {
        let mut active = HashSet::new();
        self.expand(graph, node, &mut active)
    }

    /// Recursive expansion with the cycle guard.
    ///
    /// A node already on the active path is a cycle re-encounter: it yields
    /// the empty set and records nothing here; its own expansion elsewhere
    /// in the traversal finalizes it. A finalized node returns its memoized
    /// set without re-traversal.
    fn expand(
        &mut self,
        graph: &DependencyGraph,
        node: &str,
        active: &mut HashSet<String>,
    ) -> HashSet<String> {
        if active.contains(node) {
            return HashSet::new();
        }
        if let Some(done) = self.memo.get(node) {
            return done.clone();
        }
        let Some(record) = graph.get(node) else {
            return HashSet::new();
        };
        active.insert(node.to_string());

        let mut result = HashSet::new();
        for edge in &record.outgoing_dependencies {
            let Some(target) = edge.resolved_path.as_deref() else {
                continue;
            };
            if !graph.contains(target) {
                continue;
            }
            result.insert(target.to_string());
            result.extend(self.expand(graph, target, active));
        }

        active.remove(node);
        self.memo.insert(node.to_string(), result.clone());
        self.finalized.push(node.to_string());
        result
    }
}

/// Ranks every graph node by indirect import count, descending.
///
/// The outer loop drives nodes in lexicographic order, which fixes how
/// counts are attributed inside pure cycles; ties keep finalization order.
/// Returns at most `top_count` entries.
#[must_use]
pub fn rank_top(graph: &DependencyGraph, top_count: usize) -> Vec<RankEntry> {
    let mut state = ReachState::new();
    for node in graph.nodes() {
        if state.count(node).is_none() {
            state.reachable(graph, node);
        }
    }

    let mut ranked: Vec<RankEntry> = state
        .finalized
        .iter()
        .map(|file| RankEntry {
            file: file.clone(),
            indirect_imports: state.memo[file].len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.indirect_imports.cmp(&a.indirect_imports));
    ranked.truncate(top_count);
    ranked
}
