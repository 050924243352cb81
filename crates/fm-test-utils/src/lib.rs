//! Shared test utilities for the frontmatter-order workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`vault`]: [`vault::TestVault`], a temporary directory of documents with
//!   an optional ruleset file

pub mod vault;
