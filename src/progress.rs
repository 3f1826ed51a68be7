//! Progress notices for manifest loading
//!
//! The comparison reads exactly two files, so progress reporting is a single
//! notice line per file. The notice goes to standard output ahead of the
//! rendered view and is suppressed in quiet mode.

use std::path::Path;

/// Progress reporter for the comparison workflow
pub struct Progress {
    /// Whether notices are emitted (disabled in quiet mode)
    enabled: bool,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Announce that a manifest file has been read
    ///
    /// The path is echoed exactly as it was given on the command line.
    pub fn file_read(&self, path: &Path) {
        if !self.enabled {
            return;
        }
        println!("Read {} file", path.display());
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}
