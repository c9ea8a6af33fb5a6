//! Testing utilities for the cgen workspace
//!
//! Shared fixtures: a throwaway component tree, sample component sources and
//! a scripted generation backend.

#![allow(missing_docs)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cgen_artifact::{ArtifactKind, ArtifactLayout};
use cgen_backend::{BackendError, GenerationBackend};
use parking_lot::Mutex;
use tempfile::TempDir;

/// Component with a two-field props alias
pub const BUTTON_SOURCE: &str = r#"import React from "react";

export type ButtonProps = {
  label: string;
  onClick?: () => void;
};

export const Button = ({ label, onClick }: ButtonProps) => (
  <button onClick={onClick}>{label}</button>
);
"#;

/// Component declared through an interface
pub const CARD_SOURCE: &str = r#"interface CardProps {
  title: string;
  elevated?: boolean;
}

export function Card({ title, elevated }: CardProps) {
  return <div data-elevated={elevated}>{title}</div>;
}
"#;

/// Barrel module that must never be treated as a component
pub const BARREL_SOURCE: &str = "export * from \"./Button\";\nexport * from \"./Card\";\n";

/// Well-formed backend response for `component`
pub fn valid_response(component: &str) -> String {
    serde_json::json!({
        "stories": format!("export default {{ title: \"UI/{component}\" }};\nexport const Default = {{}};\nexport const WithCustomProps = {{}};\n"),
        "test": format!("test(\"renders {component}\", () => {{}});\n"),
        "docs": format!("# {component}\n\n## Props\n"),
    })
    .to_string()
}

/// Temporary repository with a component directory, a story directory and a
/// (not yet created) docs directory
pub struct ComponentWorkspace {
    root: TempDir,
    layout: ArtifactLayout,
}

impl ComponentWorkspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("packages/ui/src")).unwrap();
        std::fs::create_dir_all(root.path().join("storybook/src/stories")).unwrap();
        let layout = ArtifactLayout::new(
            root.path().join("storybook/src/stories"),
            root.path().join("docs/docs/components"),
        );
        Self { root, layout }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn component_dir(&self) -> PathBuf {
        self.root.path().join("packages/ui/src")
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Write `<name>.tsx` into the component directory
    pub fn add_component(&self, name: &str, source: &str) -> PathBuf {
        self.add_file(&format!("{name}.{}", self.layout.source_extension), source)
    }

    /// Write an arbitrary file into the component directory
    pub fn add_file(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.component_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Create the given artifacts for `name` with placeholder contents
    pub fn add_artifacts(&self, name: &str, kinds: &[ArtifactKind]) {
        for &kind in kinds {
            let path = self.layout.path_for(kind, name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, format!("// hand written {kind}\n")).unwrap();
        }
    }

    /// Create all three artifacts for `name`
    pub fn complete(&self, name: &str) {
        self.add_artifacts(name, &ArtifactKind::ALL);
    }

    pub fn artifact_path(&self, kind: ArtifactKind, name: &str) -> PathBuf {
        self.layout.path_for(kind, name)
    }

    pub fn read_artifact(&self, kind: ArtifactKind, name: &str) -> Option<String> {
        std::fs::read_to_string(self.artifact_path(kind, name)).ok()
    }

    /// Every file under the story and docs directories, sorted
    pub fn artifact_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for dir in [&self.layout.story_dir, &self.layout.docs_dir] {
            if let Ok(entries) = std::fs::read_dir(dir) {
                files.extend(entries.filter_map(Result::ok).map(|e| e.path()));
            }
        }
        files.sort();
        files
    }
}

impl Default for ComponentWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend replaying a fixed script of responses
///
/// Every prompt is recorded. Once the script runs out, calls fail with
/// `BackendError::EmptyResponse`.
#[derive(Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, BackendError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn push_response(&self, response: impl Into<String>) -> &Self {
        self.script.lock().push_back(Ok(response.into()));
        self
    }

    pub fn push_valid(&self, component: &str) -> &Self {
        self.push_response(valid_response(component))
    }

    pub fn push_error(&self, error: BackendError) -> &Self {
        self.script.lock().push_back(Err(error));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait::async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        self.prompts.lock().push(prompt.to_string());
        self.script
            .lock()
            .pop_front()
            .unwrap_or(Err(BackendError::EmptyResponse))
    }
}
