//! CLI argument parsing module for depdiff

use clap::Parser;
use std::path::PathBuf;

/// Compare dependency versions between two package.json manifests
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depdiff",
    version,
    about = "Compare dependency versions between two package.json manifests"
)]
pub struct CliArgs {
    /// Path to my package.json
    #[arg(value_name = "MY_PACKAGE_JSON")]
    pub mine: PathBuf,

    /// Path to the foreign package.json
    #[arg(value_name = "FOREIGN_PACKAGE_JSON")]
    pub foreign: PathBuf,

    // Section selection
    /// Use devDependencies instead of dependencies
    #[arg(short, long)]
    pub dev: bool,

    /// Compare this section key instead (overrides --dev)
    #[arg(long, value_name = "KEY")]
    pub section: Option<String>,

    // View selection
    /// Print my packages and same packages with versions sync with foreign
    #[arg(short = 'm', long)]
    pub my_foreign_sync: bool,

    /// Print foreign packages and same packages with versions sync with my
    #[arg(short = 'f', long)]
    pub foreign_my_sync: bool,

    // Output options
    /// Suppress the per-file read notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// The dependency section key selected by the flags
    ///
    /// An explicit `--section` wins over `--dev`.
    pub fn section_key(&self) -> &str {
        match &self.section {
            Some(key) => key.as_str(),
            None if self.dev => "devDependencies",
            None => "dependencies",
        }
    }
}
