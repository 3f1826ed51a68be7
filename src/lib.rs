//! depdiff - package.json dependency comparison library
//!
//! This library provides the core functionality for comparing the
//! dependency sections of two package.json manifests:
//! - loading manifests and selecting a dependency section
//! - computing set differences between the two sections
//! - rendering a diff view or one of two sync views

pub mod cli;
pub mod compare;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
