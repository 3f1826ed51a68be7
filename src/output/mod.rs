//! Output rendering for comparison results
//!
//! This module provides:
//! - The default diff view listing divergences between the two manifests
//! - Two sync views producing ready-to-paste dependency blocks
//! - Role-based ANSI styling that can be disabled

mod diff_view;
mod style;
mod sync_view;

pub use diff_view::DiffView;
pub use style::{StyleRole, Styler};
pub use sync_view::{SyncDirection, SyncView};

use crate::compare::ComparisonResult;
use std::io::Write;

/// Output view options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Version changes plus each side's exclusive packages
    #[default]
    Diff,
    /// My packages with shared versions synced to foreign
    MineSync,
    /// Foreign packages with shared versions synced to mine
    ForeignSync,
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Which view to render
    pub mode: ViewMode,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(mode: ViewMode, color: bool) -> Self {
        Self { mode, color }
    }

    /// Create configuration from CLI arguments
    ///
    /// When several view flags are set the first one in this order wins:
    /// mine-sync, foreign-sync, default diff.
    pub fn from_cli(my_foreign_sync: bool, foreign_my_sync: bool, no_color: bool) -> Self {
        let mode = if my_foreign_sync {
            ViewMode::MineSync
        } else if foreign_my_sync {
            ViewMode::ForeignSync
        } else {
            ViewMode::Diff
        };

        Self {
            mode,
            color: !no_color,
        }
    }
}

/// Trait for view renderers
pub trait ViewRenderer {
    /// Render the comparison result to the writer
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a view renderer based on configuration
pub fn create_renderer(config: &OutputConfig) -> Box<dyn ViewRenderer> {
    let style = Styler::new(config.color);
    match config.mode {
        ViewMode::Diff => Box::new(DiffView::new(style)),
        ViewMode::MineSync => Box::new(SyncView::new(SyncDirection::MineWithForeign, style)),
        ViewMode::ForeignSync => Box::new(SyncView::new(SyncDirection::ForeignWithMine, style)),
    }
}
