//! Application error types using thiserror
//!
//! Every failure in this tool is fatal to the run: errors are raised while
//! loading or interrogating a manifest, propagated to `main`, and reported
//! before any diff output is produced.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or interrogating a manifest file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// Document parsed but its root is not an object
    #[error("manifest {path} is not a JSON object")]
    RootNotObject { path: PathBuf },

    /// Dependency section is present but not an object
    #[error("dependency section '{section}' in {path} is not an object")]
    SectionNotObject { path: PathBuf, section: String },

    /// Version specifier inside a dependency section is not a string
    #[error("version of '{package}' in section '{section}' of {path} is not a string")]
    VersionNotString {
        path: PathBuf,
        section: String,
        package: String,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParse error
    pub fn json_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new RootNotObject error
    pub fn root_not_object(path: impl Into<PathBuf>) -> Self {
        ManifestError::RootNotObject { path: path.into() }
    }

    /// Creates a new SectionNotObject error
    pub fn section_not_object(path: impl Into<PathBuf>, section: impl Into<String>) -> Self {
        ManifestError::SectionNotObject {
            path: path.into(),
            section: section.into(),
        }
    }

    /// Creates a new VersionNotString error
    pub fn version_not_string(
        path: impl Into<PathBuf>,
        section: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        ManifestError::VersionNotString {
            path: path.into(),
            section: section.into(),
            package: package.into(),
        }
    }

    /// Returns true for the schema-validation failures
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ManifestError::RootNotObject { .. }
                | ManifestError::SectionNotObject { .. }
                | ManifestError::VersionNotString { .. }
        )
    }
}
