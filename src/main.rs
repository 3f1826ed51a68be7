//! depdiff - package.json dependency comparison CLI tool
//!
//! Compares the dependency sections of two package.json manifests and
//! renders one of three views:
//! - the default diff of version changes and exclusive packages
//! - my packages with shared versions synced to foreign
//! - foreign packages with shared versions synced to mine

use clap::Parser;
use depdiff::cli::CliArgs;
use depdiff::compare::compare_manifests;
use depdiff::output::{create_renderer, OutputConfig};
use depdiff::progress::Progress;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Escapes are part of the output even when piped; --no-color is the
    // only switch that removes them.
    colored::control::set_override(!args.no_color);

    let progress = Progress::new(!args.quiet);
    let result = compare_manifests(&args, &progress)?;

    // Pick the view based on CLI options
    let output_config =
        OutputConfig::from_cli(args.my_foreign_sync, args.foreign_my_sync, args.no_color);
    let renderer = create_renderer(&output_config);

    let mut stdout = io::stdout().lock();
    renderer.render(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
