//! Key-ordering rules

use serde::{Deserialize, Serialize};

use crate::frontmatter::{Frontmatter, key_name};
use crate::pattern::{Pattern, matches_any};

/// The pattern lists that decide which keys go first and which go last.
///
/// Deserializes from a record with `top_keys` and `bottom_keys` string
/// arrays; a missing field is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default, rename = "top_keys")]
    pub top: Vec<Pattern>,
    #[serde(default, rename = "bottom_keys")]
    pub bottom: Vec<Pattern>,
}

impl Ruleset {
    pub fn new<T, B>(top: T, bottom: B) -> Self
    where
        T: IntoIterator,
        T::Item: Into<Pattern>,
        B: IntoIterator,
        B::Item: Into<Pattern>,
    {
        Self {
            top: top.into_iter().map(Into::into).collect(),
            bottom: bottom.into_iter().map(Into::into).collect(),
        }
    }

    /// No patterns at all; reordering is the identity.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    pub fn is_top(&self, key: &str) -> bool {
        matches_any(key, &self.top)
    }

    pub fn is_bottom(&self, key: &str) -> bool {
        matches_any(key, &self.bottom)
    }

    /// Keys of `frontmatter` selected by both a top and a bottom pattern,
    /// in source order. These end up in the bottom segment.
    pub fn conflicts(&self, frontmatter: &Frontmatter) -> Vec<String> {
        frontmatter
            .iter()
            .filter_map(|(key, _)| key_name(key))
            .filter(|name| self.is_top(name) && self.is_bottom(name))
            .map(|name| name.into_owned())
            .collect()
    }
}
