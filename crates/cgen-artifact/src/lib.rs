//! Companion artifacts of UI components
//!
//! Every component `<Name>.<ext>` is expected to ship with three companion
//! files. Their locations are fixed by an [`ArtifactLayout`]:
//!
//! ```text
//! <story_dir>/<Name>.stories.<ext>   story file
//! <story_dir>/<Name>.test.<ext>      test file
//! <docs_dir>/<Name>.<docs_ext>       documentation
//! ```
//!
//! The locator, the scanner and the writer all derive paths from the same
//! layout, so a component written by [`write`] is never reported missing by
//! the next [`scan`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cgen_artifact::{scan, ArtifactLayout};
//!
//! let layout = ArtifactLayout::default();
//! for entry in scan("packages/ui/src", &layout)? {
//!     println!("{}: missing {:?}", entry.component.name(), entry.missing);
//! }
//! ```

#![warn(unreachable_pub)]

mod error;
mod kind;
mod layout;
mod locator;
mod scanner;
mod writer;

pub use error::{ArtifactWriteError, ScanError, WriteFailure};
pub use kind::ArtifactKind;
pub use layout::{
    ArtifactLayout, DEFAULT_DOCS_DIR, DEFAULT_DOCS_EXTENSION, DEFAULT_SOURCE_EXTENSION,
    DEFAULT_STORY_DIR,
};
pub use locator::{locate, MissingArtifacts};
pub use scanner::{scan, ComponentDescriptor, ScanEntry};
pub use writer::{write, write_kinds, ArtifactContents};
