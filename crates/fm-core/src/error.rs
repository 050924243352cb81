//! Error types for fm-core

use std::path::PathBuf;

/// Result type for fm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fm-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Batch target is missing or not a directory
    #[error("{path} is not a valid directory")]
    NotADirectory { path: PathBuf },

    /// Content error from fm-content
    #[error(transparent)]
    Content(#[from] fm_content::Error),

    /// Filesystem error from fm-fs
    #[error(transparent)]
    Fs(#[from] fm_fs::Error),
}
