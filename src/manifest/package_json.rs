//! package.json manifest model
//!
//! Handles:
//! - parsing the document into its root JSON object
//! - extracting dependency sections such as `dependencies` and
//!   `devDependencies` by key

use crate::domain::DependencySet;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A parsed package.json manifest
///
/// Holds the root JSON object together with the path it was read from so
/// that errors raised later can still name the file. Dependency sections
/// are extracted on demand with [`PackageManifest::section`].
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Parses manifest content read from `path`
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse(&path, e.to_string()))?;

        match json {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(ManifestError::root_not_object(path)),
        }
    }

    /// Path the manifest was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts one dependency section by key
    ///
    /// An absent or `null` section yields an empty set, so freshly
    /// initialized manifests still compare cleanly. A section holding any
    /// other non-object value, or an object with a non-string version, is
    /// reported as a schema error naming the offending key.
    pub fn section(&self, key: &str) -> Result<DependencySet, ManifestError> {
        match self.root.get(key) {
            None | Some(Value::Null) => Ok(DependencySet::new()),
            Some(Value::Object(entries)) => {
                let mut set = DependencySet::new();
                for (name, value) in entries {
                    match value.as_str() {
                        Some(version) => {
                            set.insert(name.clone(), version);
                        }
                        None => {
                            return Err(ManifestError::version_not_string(
                                &self.path,
                                key,
                                name.clone(),
                            ));
                        }
                    }
                }
                Ok(set)
            }
            Some(_) => Err(ManifestError::section_not_object(&self.path, key)),
        }
    }
}
