//! The reset command

use std::path::Path;

use colored::Colorize;

use fm_fs::{reset_directory, restore_files};

use crate::error::Result;

/// Run the reset command
///
/// With `all`, wipes `directory` and copies the whole `backup` tree in.
/// Otherwise only files with `extension` are replaced.
pub fn run_reset(directory: &Path, backup: &Path, all: bool, extension: &str) -> Result<()> {
    if all {
        reset_directory(directory, backup)?;
        println!(
            "{} Directory '{}' has been reset from '{}'.",
            "OK".green().bold(),
            directory.display(),
            backup.display()
        );
        return Ok(());
    }

    let restored = restore_files(directory, backup, extension.trim_start_matches('.'))?;
    for name in &restored {
        println!("Restored: {}", name);
    }
    println!();
    println!("Reset complete: {} files restored", restored.len());
    Ok(())
}
