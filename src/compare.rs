//! Comparison workflow coordinating the read, extract and diff steps
//!
//! This module provides:
//! - Reading both manifests in argument order, my file first
//! - Extracting the selected dependency section from each
//! - Computing the set differences the views render

use crate::cli::CliArgs;
use crate::domain::{DependencyDiff, DependencySet};
use crate::error::ManifestError;
use crate::manifest::read_manifest;
use crate::progress::Progress;

/// Everything a view needs to render one comparison
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Selected section of my manifest
    pub mine: DependencySet,
    /// Selected section of the foreign manifest
    pub foreign: DependencySet,
    /// Set differences between the two sections
    pub diff: DependencyDiff,
}

/// Runs the comparison workflow for the given CLI arguments
///
/// Both manifests are read and parsed before any section is extracted, so
/// read notices and failures follow argument order. The first error aborts
/// the run.
pub fn compare_manifests(
    args: &CliArgs,
    progress: &Progress,
) -> Result<ComparisonResult, ManifestError> {
    let my_manifest = read_manifest(&args.mine, progress)?;
    let foreign_manifest = read_manifest(&args.foreign, progress)?;

    let key = args.section_key();
    let mine = my_manifest.section(key)?;
    let foreign = foreign_manifest.section(key)?;
    let diff = DependencyDiff::between(&mine, &foreign);

    Ok(ComparisonResult {
        mine,
        foreign,
        diff,
    })
}
