//! Component prop schema extraction
//!
//! Statically derives the named inputs ("props") of a UI component and the
//! textual rendering of each input's declared type.
//!
//! # Supported shape
//!
//! ```text
//! type ButtonProps = { label: string; onClick?: () => void };
//! export const Button = ({ label, onClick }: ButtonProps) => ...;
//! ```
//!
//! The first exported value declaration is treated as the component. Its first
//! referenced type name is resolved against the file's own top-level type
//! aliases and interfaces. Anything that cannot be resolved yields an empty
//! schema: extraction is best-effort and never blocks generation.
//!
//! # Example
//!
//! ```rust,ignore
//! use cgen_schema::extract_schema;
//!
//! let schema = extract_schema("packages/ui/src/Button.tsx")?;
//! assert_eq!(schema.get("label"), Some("string"));
//! ```

#![warn(unreachable_pub)]

mod error;
mod extract;
mod language;
mod resolver;
mod schema;

pub use error::SchemaError;
pub use extract::{extract_schema, extract_schema_from_source};
pub use language::SourceLanguage;
pub use resolver::{LocalTypeResolver, PropField, TypeResolution, TypeResolver};
pub use schema::PropSchema;

/// Type display used when a field has no resolvable annotation
pub const UNKNOWN_TYPE: &str = "unknown";
