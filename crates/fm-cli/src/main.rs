//! Frontmatter Order CLI
//!
//! Reorders YAML frontmatter keys in a directory of Markdown documents.

mod cli;
mod commands;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Frontmatter Order CLI", "fm".green().bold());
            println!();
            println!("Run {} for available commands.", "fm --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Reorder {
            directory,
            config,
            extension,
            dry_run,
            json,
        } => commands::run_reorder(&directory, &config, &extension, dry_run, json),
        Commands::Reset {
            directory,
            backup,
            all,
            extension,
        } => commands::run_reset(&directory, &backup, all, &extension),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fm", &mut std::io::stdout());
            Ok(())
        }
    }
}
