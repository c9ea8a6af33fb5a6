//! Run controller
//!
//! Scans once, filters the report, then drives the orchestrator and writer
//! component by component. Component-scoped errors are recorded in the
//! summary and the loop moves on; only an unusable component directory
//! aborts a run.
//!
//! # Filters
//!
//! The orchestrator always produces all three artifacts. A filter decides
//! which components need work and which of the generated artifacts are
//! written: only kinds that were missing *and* fall inside the filter are
//! persisted. Present files are never overwritten by a run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cgen_artifact::{
    scan, write, write_kinds, ArtifactKind, ArtifactLayout, ComponentDescriptor, ScanEntry,
};
use cgen_backend::OpenAiBackend;

use crate::config::GeneratorConfig;
use crate::error::{ComponentError, RunError};
use crate::orchestrator::{component_name, Orchestrator};
use crate::summary::{ComponentOutcome, RunSummary};

/// Which artifact kinds a run is concerned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArtifactFilter {
    /// Every kind
    #[default]
    All,
    /// Story files only
    StoriesOnly,
    /// Test files only
    TestsOnly,
    /// Documentation only
    DocsOnly,
}

impl ArtifactFilter {
    /// Build filter from the `--*-only` flags; the first set flag wins
    #[must_use]
    pub fn from_flags(stories_only: bool, tests_only: bool, docs_only: bool) -> Self {
        match (stories_only, tests_only, docs_only) {
            (true, _, _) => Self::StoriesOnly,
            (_, true, _) => Self::TestsOnly,
            (_, _, true) => Self::DocsOnly,
            _ => Self::All,
        }
    }

    /// Check if a kind passes the filter
    #[inline]
    #[must_use]
    pub fn includes(self, kind: ArtifactKind) -> bool {
        match self {
            Self::All => true,
            Self::StoriesOnly => kind == ArtifactKind::Stories,
            Self::TestsOnly => kind == ArtifactKind::Test,
            Self::DocsOnly => kind == ArtifactKind::Docs,
        }
    }
}

/// Options of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Report only; never call the backend or write
    pub dry_run: bool,
    /// Artifact kinds of interest
    pub filter: ArtifactFilter,
}

impl RunOptions {
    /// Default options: generate everything missing
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    #[inline]
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set filter
    #[inline]
    #[must_use]
    pub fn filter(mut self, filter: ArtifactFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Progress observer for a run
///
/// Every method defaults to doing nothing.
pub trait RunReporter {
    /// Scan of `dir` is about to start
    fn scan_started(&mut self, _dir: &Path) {}

    /// Filtered report is ready; called once per run, possibly with no entries
    fn report(&mut self, _entries: &[ScanEntry]) {}

    /// Dry run stopped after the report
    fn dry_run_complete(&mut self) {}

    /// Generation for a component is starting
    fn component_started(&mut self, _component: &ComponentDescriptor) {}

    /// A component finished, successfully or not
    fn component_finished(&mut self, _outcome: &ComponentOutcome) {}

    /// Run finished
    fn run_finished(&mut self, _summary: &RunSummary) {}
}

/// Reporter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl RunReporter for NoopReporter {}

/// Top-level run policy
#[derive(Debug, Clone)]
pub struct RunController {
    orchestrator: Orchestrator,
}

impl RunController {
    /// Create controller around an orchestrator
    ///
    /// Artifact paths come from the orchestrator's layout.
    #[must_use]
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    /// Create controller backed by the configured chat completions backend
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let backend = Arc::new(OpenAiBackend::new(config.backend.clone()));
        let orchestrator = Orchestrator::new(backend)
            .with_import_prefix(config.prompt.import_prefix.as_str())
            .with_layout(config.layout.clone());
        Self::new(orchestrator)
    }

    /// Layout used for scanning and writing
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &ArtifactLayout {
        self.orchestrator.layout()
    }

    /// Scan `component_dir` and generate what is missing
    ///
    /// Only the missing kinds inside `options.filter` are written, with
    /// [`ArtifactFilter::All`] too: a component lacking only its docs keeps
    /// its existing story and test files. Use [`Self::generate_one`] to
    /// regenerate all three.
    ///
    /// # Errors
    /// `RunError` only when the directory cannot be scanned. Per-component
    /// failures are recorded in the returned summary.
    pub async fn run<R>(
        &self,
        component_dir: impl AsRef<Path>,
        options: RunOptions,
        reporter: &mut R,
    ) -> Result<RunSummary, RunError>
    where
        R: RunReporter + ?Sized,
    {
        let component_dir = component_dir.as_ref();
        reporter.scan_started(component_dir);

        let flagged: Vec<ScanEntry> = scan(component_dir, self.layout())?
            .into_iter()
            .filter_map(|entry| {
                let missing = entry.missing.restrict_to(|kind| options.filter.includes(kind));
                missing.any().then_some(ScanEntry { missing, ..entry })
            })
            .collect();
        reporter.report(&flagged);

        let mut summary = RunSummary {
            flagged,
            outcomes: Vec::new(),
            dry_run: options.dry_run,
        };

        if summary.flagged.is_empty() {
            tracing::info!(dir = %component_dir.display(), "nothing to generate");
        } else if options.dry_run {
            tracing::info!(flagged = summary.flagged.len(), "dry run, skipping generation");
            reporter.dry_run_complete();
        } else {
            for entry in &summary.flagged {
                reporter.component_started(&entry.component);
                let outcome = match self.process(entry).await {
                    Ok(written) => ComponentOutcome::succeeded(entry.component.name(), written),
                    Err(err) => {
                        tracing::error!(
                            component = entry.component.name(),
                            error = %err,
                            "component failed"
                        );
                        ComponentOutcome::failed(entry.component.name(), err.to_string())
                    }
                };
                reporter.component_finished(&outcome);
                summary.outcomes.push(outcome);
            }
            tracing::info!(
                succeeded = summary.succeeded().count(),
                failed = summary.failed().count(),
                "generation run finished"
            );
        }

        reporter.run_finished(&summary);
        Ok(summary)
    }

    /// Generate and write all three artifacts of a single component
    ///
    /// Existing artifacts are overwritten.
    ///
    /// # Errors
    /// `ComponentError` if generation fails (nothing written) or a write
    /// fails (other writes still attempted).
    pub async fn generate_one(
        &self,
        source_path: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, ComponentError> {
        let source_path = source_path.as_ref();
        let result = self.orchestrator.generate(source_path).await?;
        let written = write(&component_name(source_path), &result, self.layout()).await?;
        Ok(written)
    }

    async fn process(&self, entry: &ScanEntry) -> Result<Vec<PathBuf>, ComponentError> {
        let result = self.orchestrator.generate(entry.component.source_path()).await?;
        let kinds: Vec<ArtifactKind> = entry.missing.kinds().collect();
        let written = write_kinds(entry.component.name(), &result, self.layout(), &kinds).await?;
        Ok(written)
    }
}
