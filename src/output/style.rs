//! ANSI styling for rendered view lines

use colored::Colorize;

/// Semantic role of a rendered fragment
///
/// Views pick roles, not colors, so the escape codes can be swapped or
/// disabled without touching diff logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Structural text rendered in the terminal's default style
    Unchanged,
    /// Package present only in my manifest
    Added,
    /// Package present only in the foreign manifest
    Removed,
    /// My version of a package both manifests carry
    ChangedOld,
    /// The foreign version of a package both manifests carry
    ChangedNew,
    /// Sync view lines, uniformly highlighted
    Synced,
}

/// Applies color codes to text according to its role
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    /// Whether to emit escape codes at all
    enabled: bool,
}

impl Styler {
    /// Create a new styler
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Style a piece of text for its role
    ///
    /// With styling disabled the text comes back untouched, so rendered
    /// lines keep identical content minus the escape codes.
    pub fn paint(&self, text: &str, role: StyleRole) -> String {
        if !self.enabled {
            return text.to_string();
        }

        match role {
            StyleRole::Unchanged => text.to_string(),
            StyleRole::Added | StyleRole::ChangedOld => text.bright_green().to_string(),
            StyleRole::Removed | StyleRole::ChangedNew => text.bright_red().to_string(),
            StyleRole::Synced => text.bright_blue().to_string(),
        }
    }
}
