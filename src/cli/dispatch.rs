//! Command dispatch logic extracted from the binary.

use anyhow::Result;

use super::args::Commands;
use super::handlers::{handle_entries, handle_top};
use crate::exit::HubrankExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<HubrankExit> {
    match command {
        Commands::Top {
            graph,
            count,
            verbose,
        } => handle_top(graph, count, verbose),
        Commands::Entries { graph, verbose } => handle_entries(graph, verbose),
    }
}
