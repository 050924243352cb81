//! Key patterns and shell-style wildcard matching
//!
//! `*` matches any run of characters (including none) and `?` matches
//! exactly one character. Every other character is literal, so there is no
//! escaping and no character classes. Matching is case-sensitive on every
//! platform.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key selector from a ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pattern {
    /// Selects the key with exactly this name.
    Literal(String),
    /// Selects every key the glob matches.
    Wildcard(String),
}

impl Pattern {
    /// Classify a pattern string. Anything containing `*` or `?` is a wildcard.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.contains(['*', '?']) {
            Self::Wildcard(pattern)
        } else {
            Self::Literal(pattern)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Wildcard(s) => s,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }

    /// Whether this pattern selects `key`.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Literal(literal) => literal == key,
            Self::Wildcard(glob) => glob_match(glob, key),
        }
    }
}

impl From<String> for Pattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::Literal(s) | Pattern::Wildcard(s) => s,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `key` matches any of `patterns`.
pub fn matches_any(key: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(key))
}

/// Match `text` against a glob made of `*`, `?` and literal characters.
///
/// Runs in O(pattern * text) worst case: on a mismatch the most recent `*`
/// absorbs one more character and matching resumes after it.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // (pattern index of the last `*`, text index it currently absorbs up to)
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p).copied() {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some('?') => {
                p += 1;
                t += 1;
            }
            Some(c) if c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
