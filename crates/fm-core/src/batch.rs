//! Batch reordering of a flat directory of documents
//!
//! Each document is handled in isolation: read fully, reordered, rendered,
//! and written back as a whole file. A failure on one document is recorded
//! in the report and the batch moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;

use fm_content::{Frontmatter, Ruleset, parse_document, render_document, reorder, split_document};
use fm_fs::io;

use crate::{Error, Result};

/// Options for a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// File extension to process, without the leading dot (case-sensitive)
    pub extension: String,
    /// If true, report what would change without writing anything
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            dry_run: false,
        }
    }
}

/// What happened to one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Frontmatter was reordered and the file rewritten
    Reordered,
    /// Rendering produced the exact current content; nothing written
    Unchanged,
    /// Dry run: the file would have been rewritten
    WouldReorder,
    /// No valid frontmatter block at the start of the document
    NoFrontmatter,
    /// Reading, rendering or writing failed
    Failed { reason: String },
}

impl FileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Reordered | Self::Unchanged | Self::WouldReorder)
    }
}

/// Result of processing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
    /// Keys matched by both a top and a bottom pattern
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

/// Outcome of a whole batch, in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of documents processed
    pub fn attempted(&self) -> usize {
        self.files.len()
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.status.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }
}

/// Applies one ruleset to many documents.
pub struct BatchProcessor {
    ruleset: Ruleset,
    options: BatchOptions,
}

impl BatchProcessor {
    pub fn new(ruleset: Ruleset, options: BatchOptions) -> Self {
        Self { ruleset, options }
    }

    /// Process every matching file directly inside `dir`, in file-name order.
    ///
    /// Only fails if `dir` itself cannot be listed.
    pub fn process_dir(&self, dir: &Path) -> Result<BatchReport> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let files = io::list_files(dir, &self.options.extension)?;
        tracing::debug!(dir = %dir.display(), count = files.len(), "processing directory");

        let files = files.iter().map(|path| self.process_file(path)).collect();
        Ok(BatchReport { files })
    }

    /// Reorder a single document in place.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let (status, conflicts) = match self.try_process(path) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to process file");
                (
                    FileStatus::Failed {
                        reason: e.to_string(),
                    },
                    Vec::new(),
                )
            }
        };
        FileOutcome {
            path: path.to_path_buf(),
            status,
            conflicts,
        }
    }

    fn try_process(&self, path: &Path) -> Result<(FileStatus, Vec<String>)> {
        let source = io::read_text(path)?;
        let parsed = parse_document(&source);
        if !parsed.present {
            log_missing_frontmatter(path, &source);
            return Ok((FileStatus::NoFrontmatter, Vec::new()));
        }

        let conflicts = self.ruleset.conflicts(&parsed.frontmatter);
        if !conflicts.is_empty() {
            tracing::warn!(
                path = %path.display(),
                keys = ?conflicts,
                "keys match both top and bottom patterns; placing them at the bottom"
            );
        }

        let ordered = reorder(&parsed.frontmatter, &self.ruleset);
        let rendered = render_document(&ordered, parsed.body)?;

        let status = if rendered == source {
            FileStatus::Unchanged
        } else if self.options.dry_run {
            FileStatus::WouldReorder
        } else {
            io::write_text(path, &rendered)?;
            FileStatus::Reordered
        };
        tracing::debug!(path = %path.display(), ?status, "processed");
        Ok((status, conflicts))
    }
}

fn log_missing_frontmatter(path: &Path, source: &str) {
    match split_document(source).map(|(block, _)| Frontmatter::from_yaml(block)) {
        Some(Err(e)) => {
            tracing::warn!(path = %path.display(), error = %e, "frontmatter block rejected");
        }
        _ => tracing::warn!(path = %path.display(), "no valid frontmatter found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: FileStatus) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("x.md"),
            status,
            conflicts: Vec::new(),
        }
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            files: vec![
                outcome(FileStatus::Reordered),
                outcome(FileStatus::Unchanged),
                outcome(FileStatus::NoFrontmatter),
                outcome(FileStatus::Failed {
                    reason: "boom".into(),
                }),
            ],
        };
        assert_eq!(report.attempted(), 4);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn test_default_options() {
        let options = BatchOptions::default();
        assert_eq!(options.extension, "md");
        assert!(!options.dry_run);
    }
}
