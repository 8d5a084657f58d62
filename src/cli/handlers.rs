//! Handlers for the analysis commands.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::exit::HubrankExit;
use crate::graph::{entries, load, reach};
use crate::reporting;

/// Runs the ranked top report.
///
/// # Errors
/// Returns error if the configuration or graph cannot be loaded.
pub fn handle_top(
    graph: Option<PathBuf>,
    count: Option<usize>,
    verbose: bool,
) -> Result<HubrankExit> {
    let config = resolve_config(graph, count)?;
    if let Err(e) = config.validate() {
        eprintln!("{} {e}", "Error:".red());
        return Ok(HubrankExit::InvalidInput);
    }

    let graph = load::load(&config.graph)?;
    if verbose {
        println!(
            "Loaded {} nodes from {}",
            graph.len(),
            config.graph.display()
        );
    }

    let ranked = reach::rank_top(&graph, config.top);
    print!("{}", reporting::render_top(&ranked));
    Ok(HubrankExit::Success)
}

/// Runs the entry-point report.
///
/// # Errors
/// Returns error if the configuration or graph cannot be loaded.
pub fn handle_entries(graph: Option<PathBuf>, verbose: bool) -> Result<HubrankExit> {
    let config = resolve_config(graph, None)?;
    let graph = load::load(&config.graph)?;
    if verbose {
        println!(
            "Loaded {} nodes from {}",
            graph.len(),
            config.graph.display()
        );
    }

    let points = entries::probable_entry_points(&graph);
    print!("{}", reporting::render_entry_points(&points));
    Ok(HubrankExit::Success)
}

fn resolve_config(graph: Option<PathBuf>, count: Option<usize>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(graph) = graph {
        config.graph = graph;
    }
    if let Some(count) = count {
        config.top = count;
    }
    Ok(config)
}
