//! Ordered frontmatter mapping
//!
//! [`Frontmatter`] wraps a `serde_yaml::Mapping`, which keeps keys in
//! insertion order with constant-time lookup. Source order of the block is
//! the tie-break for every placement the reorderer does not decide.

use std::borrow::Cow;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// An ordered key/value block parsed from the top of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML block content.
    ///
    /// Fails if the content is not valid YAML or is not a mapping
    /// (scalars, sequences and empty content are rejected).
    pub fn from_yaml(source: &str) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
        match value {
            Value::Mapping(mapping) => Ok(Self(mapping)),
            other => Err(Error::NotAMapping {
                found: kind_of(&other).to_string(),
            }),
        }
    }

    /// Render the mapping as YAML, keeping key order exactly as stored.
    ///
    /// The output always ends with a newline.
    pub fn to_yaml(&self) -> Result<String> {
        let mut yaml = serde_yaml::to_string(&self.0)?;
        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }
        Ok(yaml)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an entry, or replace the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate entries in stored order.
    pub fn iter(&self) -> serde_yaml::mapping::Iter<'_> {
        self.0.iter()
    }

    /// Key names in stored order.
    ///
    /// Keys without a name (sequences, mappings, tagged values) are shown
    /// in their debug form.
    pub fn key_names(&self) -> Vec<String> {
        self.0
            .keys()
            .map(|k| match key_name(k) {
                Some(name) => name.into_owned(),
                None => format!("{k:?}"),
            })
            .collect()
    }
}

impl From<Mapping> for Frontmatter {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

impl FromIterator<(Value, Value)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Frontmatter {
    type Item = (&'a Value, &'a Value);
    type IntoIter = serde_yaml::mapping::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The name a key is matched by.
///
/// String keys are used verbatim; numbers, booleans and null use their YAML
/// scalar text. Complex keys have no name and match no pattern.
pub fn key_name(key: &Value) -> Option<Cow<'_, str>> {
    match key {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null => Some(Cow::Borrowed("null")),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
