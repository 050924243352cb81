//! Frontmatter parsing, key patterns, and reordering for Frontmatter Order
//!
//! Splits Markdown documents into a YAML frontmatter block and a body,
//! reorders the block's keys according to a [`Ruleset`], and renders the
//! document back without touching the body.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod pattern;
pub mod reorder;
pub mod ruleset;

pub use document::{ParsedDocument, parse_document, render_document, split_document};
pub use error::{Error, Result};
pub use frontmatter::{Frontmatter, key_name};
pub use pattern::{Pattern, glob_match, matches_any};
pub use reorder::reorder;
pub use ruleset::Ruleset;
