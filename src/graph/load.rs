// src/graph/load.rs
use std::fs;
use std::path::Path;

use crate::error::{HubrankError, Result};
use crate::graph::model::DependencyGraph;

/// Reads and parses a dependency graph resource.
///
/// An unreadable file or a top-level document that is not a mapping of node
/// records is fatal; everything below the top level follows the model's
/// tolerance rules.
///
/// # Errors
///
/// Returns `HubrankError::Io` if the file cannot be read and
/// `HubrankError::Parse` if it does not deserialize into a graph.
pub fn load(path: &Path) -> Result<DependencyGraph> {
    let raw = fs::read_to_string(path).map_err(|source| HubrankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&raw).map_err(|source| HubrankError::Parse {
        source,
        path: path.to_path_buf(),
    })
}
