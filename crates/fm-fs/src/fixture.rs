//! Restoring a working directory from a known-good backup
//!
//! Used to put test documents back into their original state before a run.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Replace everything inside `target` with a copy of `backup`'s contents.
///
/// `target` is created if missing; otherwise every entry in it is deleted
/// first. Subdirectories of `backup` are copied recursively.
pub fn reset_directory(target: &Path, backup: &Path) -> Result<()> {
    ensure_backup(backup)?;

    if target.exists() {
        for entry in fs::read_dir(target).map_err(|e| Error::io(target, e))? {
            let path = entry.map_err(|e| Error::io(target, e))?.path();
            remove_entry(&path)?;
        }
    } else {
        fs::create_dir_all(target).map_err(|e| Error::io(target, e))?;
    }

    copy_dir_contents(backup, target)?;
    tracing::info!(
        target_dir = %target.display(),
        backup = %backup.display(),
        "directory reset from backup"
    );
    Ok(())
}

/// Put back only the files with `extension` (no leading dot).
///
/// Deletes such files from `target`, copies the same-extension files from
/// `backup`, and returns the restored file names in sorted order. Other
/// files and all subdirectories are left alone.
pub fn restore_files(target: &Path, backup: &Path, extension: &str) -> Result<Vec<String>> {
    ensure_backup(backup)?;
    fs::create_dir_all(target).map_err(|e| Error::io(target, e))?;

    for path in crate::io::list_files(target, extension)? {
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    }

    let mut restored = Vec::new();
    for src in crate::io::list_files(backup, extension)? {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = target.join(name);
        fs::copy(&src, &dst).map_err(|e| Error::io(&dst, e))?;
        tracing::debug!(file = %name.to_string_lossy(), "restored");
        restored.push(name.to_string_lossy().into_owned());
    }
    Ok(restored)
}

fn ensure_backup(backup: &Path) -> Result<()> {
    if backup.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingBackup {
            path: backup.to_path_buf(),
        })
    }
}

fn remove_entry(path: &Path) -> Result<()> {
    let result = if path.is_dir() && !path.is_symlink() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::io(path, e))
}

fn copy_dir_contents(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let from = entry.map_err(|e| Error::io(src, e))?.path();
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = dst.join(name);
        if from.is_dir() {
            fs::create_dir_all(&to).map_err(|e| Error::io(&to, e))?;
            copy_dir_contents(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&to, e))?;
        }
    }
    Ok(())
}
