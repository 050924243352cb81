//! Filesystem access for Frontmatter Order
//!
//! Whole-file atomic I/O, format-detecting config loading, and fixture
//! directory resets for tests and demos.

pub mod config;
pub mod error;
pub mod fixture;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fixture::{reset_directory, restore_files};
