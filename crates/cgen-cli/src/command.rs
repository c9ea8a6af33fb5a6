//! Argument definitions (clap builder API)

use std::path::PathBuf;

use cgen_core::{ArtifactFilter, RunOptions};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};

const SCAN_AFTER_HELP: &str = "\
Examples:
  scan-and-generate packages/ui/src --dry-run
  scan-and-generate packages/ui/src --generate
  scan-and-generate packages/ui/src --stories-only";

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (default: ./cgen.toml when present)")
}

/// `scan-and-generate` command
#[must_use]
pub fn scan_and_generate_command() -> Command {
    Command::new("scan-and-generate")
        .version(cgen_core::VERSION)
        .about("Find components missing stories, tests or docs and generate them")
        .after_help(SCAN_AFTER_HELP)
        .arg(
            Arg::new("component-dir")
                .value_name("COMPONENT_DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory containing components (e.g. packages/ui/src)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Show what would be generated without creating files"),
        )
        .arg(
            Arg::new("generate")
                .long("generate")
                .action(ArgAction::SetTrue)
                .help("Generate the missing files (default unless --dry-run)"),
        )
        .arg(
            Arg::new("stories-only")
                .long("stories-only")
                .action(ArgAction::SetTrue)
                .help("Only consider missing story files"),
        )
        .arg(
            Arg::new("tests-only")
                .long("tests-only")
                .action(ArgAction::SetTrue)
                .help("Only consider missing test files"),
        )
        .arg(
            Arg::new("docs-only")
                .long("docs-only")
                .action(ArgAction::SetTrue)
                .help("Only consider missing documentation files"),
        )
        .group(
            ArgGroup::new("only")
                .args(["stories-only", "tests-only", "docs-only"])
                .multiple(false),
        )
        .arg(config_arg())
}

/// `generate-one` command
#[must_use]
pub fn generate_one_command() -> Command {
    Command::new("generate-one")
        .version(cgen_core::VERSION)
        .about("Generate story, test and docs for a single component")
        .arg(
            Arg::new("component-path")
                .value_name("COMPONENT_PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Component source file"),
        )
        .arg(config_arg())
}

/// Parsed `scan-and-generate` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanArgs {
    /// Component directory; `None` prints usage
    pub component_dir: Option<PathBuf>,
    /// Report without generating
    pub dry_run: bool,
    /// Kinds of interest
    pub filter: ArtifactFilter,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

impl ScanArgs {
    /// Read arguments from matches of [`scan_and_generate_command`]
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            component_dir: matches.get_one::<PathBuf>("component-dir").cloned(),
            // --dry-run wins over --generate
            dry_run: matches.get_flag("dry-run"),
            filter: ArtifactFilter::from_flags(
                matches.get_flag("stories-only"),
                matches.get_flag("tests-only"),
                matches.get_flag("docs-only"),
            ),
            config: matches.get_one::<PathBuf>("config").cloned(),
        }
    }

    /// Run options for the controller
    #[must_use]
    pub fn options(&self) -> RunOptions {
        RunOptions::new().dry_run(self.dry_run).filter(self.filter)
    }
}

/// Parsed `generate-one` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOneArgs {
    /// Component source file
    pub source_path: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

impl GenerateOneArgs {
    /// Read arguments from matches of [`generate_one_command`]
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            source_path: matches.get_one::<PathBuf>("component-path").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
        }
    }
}
