// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubrankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid dependency graph: {source} (path: {path})")]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid config: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Top count must be a positive integer")]
    InvalidTopCount,
}

pub type Result<T> = std::result::Result<T, HubrankError>;

// Allow `?` on std::io::Error by converting to HubrankError::Io with unknown path.
impl From<std::io::Error> for HubrankError {
    fn from(source: std::io::Error) -> Self {
        HubrankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
