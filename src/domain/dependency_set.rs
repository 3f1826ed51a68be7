//! Dependency section contents as an ordered name/version mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One manifest section's dependencies: package name mapped to version
/// specifier
///
/// Backed by a `BTreeMap` so iteration is already in ascending lexicographic
/// name order, which is the order every rendered view lists packages in.
/// Version specifiers are opaque strings; nothing in the tool parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencySet {
    entries: BTreeMap<String, String>,
}

impl DependencySet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a package, returning the previous version specifier if the
    /// name was already present (last entry wins, as in JSON objects)
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(name.into(), version.into())
    }

    /// Returns the version specifier recorded for a package
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true if the package is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of packages in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no packages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Package names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// (name, version) pairs in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }
}
