//! Command line entry points
//!
//! Two binaries share this library:
//! - `scan-and-generate <componentDir>` audits a directory and fills gaps
//! - `generate-one <componentSourcePath>` regenerates one component
//!
//! Exit codes: `scan-and-generate` fails only when the directory (or the
//! configuration) is unusable; per-component failures are printed but do
//! not change the status. `generate-one` fails on any error.

#![warn(unreachable_pub)]

mod command;
mod logging;
mod reporter;

use std::path::Path;

use anyhow::Context;
use cgen_core::{GeneratorConfig, RunController, RunError};

pub use command::{generate_one_command, scan_and_generate_command, GenerateOneArgs, ScanArgs};
pub use logging::init_tracing;
pub use reporter::ConsoleReporter;

/// Load configuration for this process
///
/// # Errors
/// Returns an error if an explicit or discovered config file is unusable.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let config = GeneratorConfig::load(explicit).context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Body of `scan-and-generate`; returns the process exit code
pub async fn scan_and_generate(args: &ScanArgs) -> i32 {
    let Some(component_dir) = args.component_dir.as_deref() else {
        // no directory: print usage and succeed, like --help
        let _ = scan_and_generate_command().print_help();
        return 0;
    };

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {err:#}");
            return 1;
        }
    };

    let controller = RunController::from_config(&config);
    let mut reporter = ConsoleReporter::stdio();
    match controller.run(component_dir, args.options(), &mut reporter).await {
        Ok(_) => 0,
        Err(RunError::DirectoryNotFound(path)) => {
            eprintln!("❌ Directory not found: {}", path.display());
            1
        }
        Err(err) => {
            eprintln!("❌ {err}");
            1
        }
    }
}

/// Body of `generate-one`; returns the process exit code
pub async fn generate_one(args: &GenerateOneArgs) -> i32 {
    let Some(source_path) = args.source_path.as_deref() else {
        eprintln!("no component path provided");
        eprintln!("{}", generate_one_command().render_usage());
        return 1;
    };

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {err:#}");
            return 1;
        }
    };

    let name = cgen_core::component_name(source_path);
    match RunController::from_config(&config).generate_one(source_path).await {
        Ok(written) => {
            println!("✅ Generated docs, stories, and test for {name}");
            for path in written {
                println!("   {}", path.display());
            }
            0
        }
        Err(err) => {
            eprintln!("❌ Failed to generate files for {name}: {err}");
            1
        }
    }
}
