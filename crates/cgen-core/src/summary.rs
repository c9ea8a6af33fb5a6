//! Run outcomes
//!
//! Reporting only; nothing downstream depends on the shape of a summary.

use std::fmt::Write as _;
use std::path::PathBuf;

use cgen_artifact::{MissingArtifacts, ScanEntry};
use serde::Serialize;

/// Result of processing one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Artifacts generated and written
    Succeeded {
        /// Paths written, in write order
        written: Vec<PathBuf>,
    },
    /// Component skipped after an error
    Failed {
        /// Human-readable cause
        reason: String,
    },
}

/// One component's outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOutcome {
    /// Component name
    pub component: String,
    /// What happened
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl ComponentOutcome {
    /// Successful outcome
    #[must_use]
    pub fn succeeded(component: impl Into<String>, written: Vec<PathBuf>) -> Self {
        Self {
            component: component.into(),
            status: OutcomeStatus::Succeeded { written },
        }
    }

    /// Failed outcome
    #[must_use]
    pub fn failed(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: OutcomeStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Check if the component succeeded
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Succeeded { .. })
    }
}

/// Summary of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Components that needed work, after filtering
    pub flagged: Vec<ScanEntry>,
    /// Per-component outcomes in processing order (empty for dry runs)
    pub outcomes: Vec<ComponentOutcome>,
    /// Whether generation was skipped
    pub dry_run: bool,
}

impl RunSummary {
    /// Outcomes that succeeded
    pub fn succeeded(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Outcomes that failed
    pub fn failed(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Check if there was nothing to do
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Plain-text rendering: counts, then one line per outcome
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.is_complete() {
            out.push_str("All components have stories, tests, and docs.\n");
            return out;
        }
        if self.dry_run {
            let _ = writeln!(out, "{} components need work (dry run)", self.flagged.len());
            for entry in &self.flagged {
                let _ = writeln!(
                    out,
                    "  {}: missing {}",
                    entry.component.name(),
                    missing_labels(entry.missing)
                );
            }
            return out;
        }

        let ok = self.succeeded().count();
        let _ = writeln!(out, "{ok} succeeded, {} failed", self.outcomes.len() - ok);
        for outcome in &self.outcomes {
            match &outcome.status {
                OutcomeStatus::Succeeded { written } => {
                    let _ = writeln!(
                        out,
                        "  ok     {} ({} files)",
                        outcome.component,
                        written.len()
                    );
                }
                OutcomeStatus::Failed { reason } => {
                    let _ = writeln!(out, "  failed {}: {reason}", outcome.component);
                }
            }
        }
        out
    }
}

/// Comma separated labels of missing artifacts, e.g. `story, docs`
#[must_use]
pub fn missing_labels(missing: MissingArtifacts) -> String {
    missing
        .kinds()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}
