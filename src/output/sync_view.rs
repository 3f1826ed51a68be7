//! Sync views producing a ready-to-paste dependency block

use crate::compare::ComparisonResult;
use crate::output::{StyleRole, Styler, ViewRenderer};
use std::io::Write;

/// Which manifest keeps its exclusive packages in the rendered block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// My packages, shared ones adopting the foreign version
    MineWithForeign,
    /// Foreign packages, shared ones adopting my version
    ForeignWithMine,
}

/// Renders one of the two sync views
///
/// The block lists one side's packages plus everything shared, with shared
/// names carrying the other side's version. Every line ends with a comma
/// except the last, so the block pastes into a manifest as-is.
pub struct SyncView {
    direction: SyncDirection,
    style: Styler,
}

impl SyncView {
    /// Create a new sync view for the given direction
    pub fn new(direction: SyncDirection, style: Styler) -> Self {
        Self { direction, style }
    }
}

impl ViewRenderer for SyncView {
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let diff = &result.diff;
        let (exclusive, own, other) = match self.direction {
            SyncDirection::MineWithForeign => (diff.only_in_mine(), &result.mine, &result.foreign),
            SyncDirection::ForeignWithMine => {
                (diff.only_in_foreign(), &result.foreign, &result.mine)
            }
        };

        // The two sets are disjoint, so the union iterator is already sorted.
        let names: Vec<&String> = exclusive.union(diff.in_both()).collect();
        let count = names.len();

        for (index, name) in names.into_iter().enumerate() {
            let source = if diff.in_both().contains(name) {
                other
            } else {
                own
            };
            if let Some(version) = source.get(name) {
                let comma = if index == count - 1 { "" } else { "," };
                writeln!(
                    writer,
                    "{}",
                    self.style.paint(
                        &format!("\"{}\": \"{}\"{}", name, version, comma),
                        StyleRole::Synced,
                    ),
                )?;
            }
        }

        Ok(())
    }
}
