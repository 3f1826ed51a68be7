//! Default diff view listing version changes and exclusive packages

use crate::compare::ComparisonResult;
use crate::output::{StyleRole, Styler, ViewRenderer};
use std::io::Write;

/// Renders the default diff view
///
/// Order is fixed: shared packages whose versions differ first, then
/// packages only in my manifest, then packages only in the foreign one,
/// each group sorted by name. Every line ends with a comma; the listing is
/// not valid JSON.
pub struct DiffView {
    style: Styler,
}

impl DiffView {
    /// Create a new diff view
    pub fn new(style: Styler) -> Self {
        Self { style }
    }
}

impl ViewRenderer for DiffView {
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for name in result.diff.in_both_diff_version() {
            if let (Some(mine), Some(foreign)) = (result.mine.get(name), result.foreign.get(name))
            {
                writeln!(
                    writer,
                    "{}{}-> {},",
                    self.style
                        .paint(&format!("\"{}\": ", name), StyleRole::Unchanged),
                    self.style
                        .paint(&format!("\"{}\" ", mine), StyleRole::ChangedOld),
                    self.style
                        .paint(&format!("\"{}\"", foreign), StyleRole::ChangedNew),
                )?;
            }
        }

        for name in result.diff.only_in_mine() {
            if let Some(version) = result.mine.get(name) {
                writeln!(
                    writer,
                    "{},",
                    self.style
                        .paint(&format!("\"{}\": \"{}\"", name, version), StyleRole::Added),
                )?;
            }
        }

        for name in result.diff.only_in_foreign() {
            if let Some(version) = result.foreign.get(name) {
                writeln!(
                    writer,
                    "{},",
                    self.style
                        .paint(&format!("\"{}\": \"{}\"", name, version), StyleRole::Removed),
                )?;
            }
        }

        Ok(())
    }
}
