//! Companion artifact generation
//!
//! Ties the pieces together:
//!
//! ```text
//! component dir → scan → report → (per component) extract props → prompt
//!               → backend → strict parse → write → summary
//! ```
//!
//! Components are processed one at a time. A failure is recorded against its
//! component and the run moves on; only a missing component directory aborts
//! a run.
//!
//! # Example
//!
//! ```rust,ignore
//! use cgen_core::{GeneratorConfig, NoopReporter, Orchestrator, RunController, RunOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::load(None)?;
//! let controller = RunController::from_config(&config);
//!
//! let summary = controller
//!     .run("packages/ui/src", RunOptions::new().dry_run(true), &mut NoopReporter)
//!     .await?;
//! println!("{}", summary.render_text());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod controller;
pub mod error;
pub mod orchestrator;
pub mod request;
pub mod result;
pub mod summary;

pub use config::{GeneratorConfig, PromptConfig, CONFIG_FILE_NAME, DEFAULT_IMPORT_PREFIX};
pub use controller::{ArtifactFilter, NoopReporter, RunController, RunOptions, RunReporter};
pub use error::{ComponentError, ConfigError, GenerateError, GenerationParseError, RunError};
pub use orchestrator::{component_name, Orchestrator};
pub use request::GenerationRequest;
pub use result::GenerationResult;
pub use summary::{missing_labels, ComponentOutcome, OutcomeStatus, RunSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
