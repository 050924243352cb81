//! Ruleset loading and batch processing for Frontmatter Order
//!
//! Ties the pure reordering in `fm-content` to the filesystem: loads the
//! ruleset once per run and rewrites each document in a directory.

pub mod batch;
pub mod error;
pub mod ruleset;

pub use batch::{BatchOptions, BatchProcessor, BatchReport, FileOutcome, FileStatus};
pub use error::{Error, Result};
pub use ruleset::{DEFAULT_CONFIG_FILE, RulesetLoad, load_ruleset};

pub use fm_content::{Pattern, Ruleset};
