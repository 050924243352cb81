//! Deterministic key reordering
//!
//! The output is built from three segments:
//!
//! 1. **top**: for each top pattern in declaration order, every key it
//!    selects, in source order, unless already placed;
//! 2. **middle**: keys selected by no pattern at all, in source order;
//! 3. **bottom**: keys selected by any bottom pattern, in source order.
//!    Bottom pattern order decides membership only, never sequence.
//!
//! A key selected by both a top and a bottom pattern goes to the bottom
//! segment. [`Ruleset::conflicts`] reports such keys so callers can warn.

use serde_yaml::Mapping;

use crate::frontmatter::{Frontmatter, key_name};
use crate::ruleset::Ruleset;

/// Reorder `frontmatter` according to `rules`.
///
/// The result holds exactly the same keys and values. This never fails:
/// patterns that select nothing contribute nothing.
pub fn reorder(frontmatter: &Frontmatter, rules: &Ruleset) -> Frontmatter {
    let mut top = Mapping::new();
    let mut middle = Mapping::new();
    let mut bottom = Mapping::new();

    for pattern in &rules.top {
        for (key, value) in frontmatter {
            let Some(name) = key_name(key) else {
                continue;
            };
            if pattern.matches(&name) && !rules.is_bottom(&name) && !top.contains_key(key) {
                top.insert(key.clone(), value.clone());
            }
        }
    }

    for (key, value) in frontmatter {
        match key_name(key) {
            Some(name) if rules.is_bottom(&name) => {
                bottom.insert(key.clone(), value.clone());
            }
            Some(name) if rules.is_top(&name) => {}
            _ => {
                middle.insert(key.clone(), value.clone());
            }
        }
    }

    top.into_iter().chain(middle).chain(bottom).collect()
}
