use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hubrank", version, about = "Dependency graph hub analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank files by how many components they transitively import
    Top {
        /// Graph resource to analyze (defaults to config, then dependencyGraph.json)
        #[arg(value_name = "GRAPH")]
        graph: Option<PathBuf>,
        /// Number of entries to report
        #[arg(long, short, value_name = "N")]
        count: Option<usize>,
        /// Print load statistics
        #[arg(long, short)]
        verbose: bool,
    },
    /// List probable entry points (files nothing depends on)
    Entries {
        /// Graph resource to analyze (defaults to config, then dependencyGraph.json)
        #[arg(value_name = "GRAPH")]
        graph: Option<PathBuf>,
        /// Print load statistics
        #[arg(long, short)]
        verbose: bool,
    },
}
