//! The reorder command

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use fm_core::{BatchOptions, BatchProcessor, BatchReport, FileOutcome, FileStatus, load_ruleset};

use crate::error::{CliError, Result};

/// Run the reorder command
///
/// Loads the ruleset (falling back to an empty one with a warning), then
/// rewrites every matching document in `directory`.
pub fn run_reorder(
    directory: &Path,
    config: &Path,
    extension: &str,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    if !directory.is_dir() {
        return Err(CliError::user(format!(
            "{} is not a valid directory",
            directory.display()
        )));
    }

    let load = load_ruleset(config);
    if !json {
        if let Some(warning) = &load.warning {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
            eprintln!("Using default configuration (no reordering will occur).");
        }
    }

    let options = BatchOptions {
        extension: extension.trim_start_matches('.').to_string(),
        dry_run,
    };
    let report = BatchProcessor::new(load.ruleset, options).process_dir(directory)?;

    if json {
        let output = json!({
            "directory": directory,
            "dry_run": dry_run,
            "config_warning": load.warning,
            "attempted": report.attempted(),
            "succeeded": report.succeeded(),
            "failed": report.failed(),
            "files": report.files,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for outcome in &report.files {
        print_outcome(outcome);
    }
    print_summary(&report, dry_run);
    Ok(())
}

fn print_outcome(outcome: &FileOutcome) {
    let name = outcome
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.path.display().to_string());

    match &outcome.status {
        FileStatus::Reordered => println!("  {} {}", "OK".green().bold(), name),
        FileStatus::Unchanged => println!("  {} {}", "UNCHANGED".dimmed(), name),
        FileStatus::WouldReorder => println!("  {} {}", "WOULD".cyan().bold(), name),
        FileStatus::NoFrontmatter => println!(
            "  {} {}: no valid frontmatter found",
            "SKIP".yellow().bold(),
            name
        ),
        FileStatus::Failed { reason } => {
            println!("  {} {}: {}", "FAIL".red().bold(), name, reason)
        }
    }

    if !outcome.conflicts.is_empty() {
        println!(
            "    {} in both top and bottom lists, placed at bottom: {}",
            "!".yellow(),
            outcome.conflicts.join(", ")
        );
    }
}

fn print_summary(report: &BatchReport, dry_run: bool) {
    println!();
    println!("Processed {} files:", report.attempted());
    if dry_run {
        println!("- Would succeed: {}", report.succeeded());
    } else {
        println!("- Successfully reordered: {}", report.succeeded());
    }
    println!("- Failed: {}", report.failed());
}
