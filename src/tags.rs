//! Tag set value object
//!
//! Tags arrive from several context sources (universal tags, derived
//! per-resource entries, profile and region overrides) and are merged with
//! explicit last-write-wins precedence. Backed by a `BTreeMap` so serialized
//! output has a stable key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{StackplanError, StackplanResult};

/// Tag keys that must be present after merging
pub const REQUIRED_TAG_KEYS: [&str; 2] = ["Owner", "Environment"];

/// An ordered string-to-string tag map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, replacing any existing value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a tag value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Merge another source into this set; the other source wins on
    /// key collision (last-write-wins)
    pub fn merge(&mut self, other: &TagSet) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Merge an ordered list of sources into one set, later sources
    /// overriding earlier ones
    pub fn merged(sources: &[&TagSet]) -> TagSet {
        let mut result = TagSet::new();
        for source in sources {
            result.merge(source);
        }
        result
    }

    /// Fail unless every required tag key is present
    pub fn require_standard(&self) -> StackplanResult<()> {
        for key in REQUIRED_TAG_KEYS {
            if !self.0.contains_key(key) {
                return Err(StackplanError::MissingTag {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tags are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for TagSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
