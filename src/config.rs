use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HubrankError, Result};

pub const CONFIG_FILE: &str = "hubrank.toml";
pub const DEFAULT_GRAPH: &str = "dependencyGraph.json";
pub const DEFAULT_TOP: usize = 20;

/// Run configuration: which graph resource to analyze and how many ranked
/// entries to report. CLI arguments override the file overlay.
#[derive(Debug, Clone)]
pub struct Config {
    pub graph: PathBuf,
    pub top: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    graph: Option<PathBuf>,
    top: Option<usize>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: PathBuf::from(DEFAULT_GRAPH),
            top: DEFAULT_TOP,
        }
    }

    /// Loads the configuration, overlaying `hubrank.toml` from the working
    /// directory when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads the configuration from an explicit overlay path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        if !path.exists() {
            return Ok(config);
        }

        let raw = fs::read_to_string(path).map_err(|source| HubrankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|source| HubrankError::Config {
            source,
            path: path.to_path_buf(),
        })?;

        if let Some(graph) = file.graph {
            config.graph = graph;
        }
        if let Some(top) = file.top {
            config.top = top;
        }
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the top count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            return Err(HubrankError::InvalidTopCount);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
