//! Human-readable run progress

use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use cgen_artifact::{ComponentDescriptor, ScanEntry};
use cgen_core::{missing_labels, ComponentOutcome, OutcomeStatus, RunReporter, RunSummary};

/// Prints run progress: report and progress lines to `out`, failures to `err`
///
/// Output errors are ignored; a closed pipe must not fail the run.
#[derive(Debug)]
pub struct ConsoleReporter<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    generating: bool,
}

impl ConsoleReporter {
    /// Reporter on the process stdout and stderr
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Reporter on custom writers
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            generating: false,
        }
    }

    /// Give back the writers
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> RunReporter for ConsoleReporter<O, E> {
    fn scan_started(&mut self, dir: &Path) {
        let _ = writeln!(self.out, "🔍 Scanning {} for missing files...", dir.display());
    }

    fn report(&mut self, entries: &[ScanEntry]) {
        if entries.is_empty() {
            let _ = writeln!(self.out, "✅ All components have stories, tests, and docs!");
            return;
        }
        let _ = writeln!(
            self.out,
            "\n📋 Found {} components with missing files:\n",
            entries.len()
        );
        for entry in entries {
            let _ = writeln!(
                self.out,
                "📁 {}: missing {}",
                entry.component.name(),
                missing_labels(entry.missing)
            );
        }
    }

    fn dry_run_complete(&mut self) {
        let _ = writeln!(
            self.out,
            "\n🔍 Dry run complete. Use --generate to create missing files."
        );
    }

    fn component_started(&mut self, component: &ComponentDescriptor) {
        if !self.generating {
            self.generating = true;
            let _ = writeln!(self.out, "\n🚀 Generating missing files...\n");
        }
        let _ = writeln!(self.out, "⚡ Generating files for {}...", component.name());
    }

    fn component_finished(&mut self, outcome: &ComponentOutcome) {
        match &outcome.status {
            OutcomeStatus::Succeeded { .. } => {
                let _ = writeln!(self.out, "✅ Generated files for {}", outcome.component);
            }
            OutcomeStatus::Failed { reason } => {
                let _ = writeln!(
                    self.err,
                    "❌ Failed to generate files for {}: {reason}",
                    outcome.component
                );
            }
        }
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        if summary.outcomes.is_empty() {
            return;
        }
        let _ = write!(self.out, "\n🎉 Generation complete! {}", summary.render_text());
        let _ = self.out.flush();
    }
}
