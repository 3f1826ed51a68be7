//! Core domain models for depdiff
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency section contents as ordered name/version mappings
//! - Set differences derived from comparing two sections

mod dependency_set;
mod diff;

pub use dependency_set::DependencySet;
pub use diff::DependencyDiff;
