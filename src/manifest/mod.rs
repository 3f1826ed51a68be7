//! Manifest file reading and parsing
//!
//! This module provides functionality to:
//! - Read package.json files from disk, announcing each read
//! - Parse the document into a [`PackageManifest`]
//! - Extract dependency sections for comparison

mod package_json;

pub use package_json::PackageManifest;

use crate::error::ManifestError;
use crate::progress::Progress;
use std::io::ErrorKind;
use std::path::Path;

/// Reads and parses a package.json manifest
///
/// The read notice is reported once the file content is in hand, before
/// parsing starts, so a malformed file is still announced while a missing
/// one is not.
pub fn read_manifest(path: &Path, progress: &Progress) -> Result<PackageManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        _ => ManifestError::read(path, e),
    })?;

    progress.file_read(path);
    PackageManifest::parse(path, content.as_str())
}
