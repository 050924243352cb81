//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use fm_core::DEFAULT_CONFIG_FILE;

/// Frontmatter Order - Reorder YAML frontmatter keys in Markdown files
#[derive(Parser, Debug)]
#[command(name = "fm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reorder frontmatter in every document of a directory
    ///
    /// Only files directly in DIRECTORY are processed; subdirectories are
    /// not entered. The config file holds `top_keys` and `bottom_keys`
    /// lists; `*` and `?` wildcards are supported.
    ///
    /// Examples:
    ///   fm reorder ./notes
    ///   fm reorder ./notes --config rules.toml
    ///   fm reorder ./notes --dry-run --json
    Reorder {
        /// Directory containing the documents
        directory: PathBuf,

        /// Ruleset file (.json, .toml, .yaml or .yml)
        #[arg(short, long, env = "FM_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// File extension to process
        #[arg(short, long, default_value = "md")]
        extension: String,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Restore a directory of test documents from a backup copy
    ///
    /// By default only files with the given extension are replaced.
    /// With --all, everything in DIRECTORY is deleted and the whole
    /// backup tree is copied in.
    Reset {
        /// Directory to restore
        directory: PathBuf,

        /// Backup directory holding the original documents
        #[arg(long = "from", value_name = "BACKUP")]
        backup: PathBuf,

        /// Replace the entire directory contents
        #[arg(long)]
        all: bool,

        /// File extension to restore (ignored with --all)
        #[arg(short, long, default_value = "md")]
        extension: String,
    },

    /// Generate shell completion scripts
    ///
    /// Examples:
    ///   fm completions bash > ~/.local/share/bash-completion/completions/fm
    ///   fm completions zsh > ~/.zfunc/_fm
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
