use clap::Parser;
use colored::Colorize;
use hubrank_core::cli::{self, Cli};
use hubrank_core::exit::HubrankExit;

fn main() -> HubrankExit {
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(HubrankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            HubrankExit::Error
        }
    }
}
