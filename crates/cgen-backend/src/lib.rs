//! Generation backend
//!
//! The backend is a black box: one prompt in, one text response out. It may
//! fail, and it may return text that is not what was asked for. Interpreting
//! the response is the caller's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use cgen_backend::{BackendConfig, GenerationBackend, OpenAiBackend};
//!
//! let backend = OpenAiBackend::new(BackendConfig::new().with_api_key(api_key));
//! let text = backend.complete("Return {\"ok\": true}").await?;
//! ```

#![warn(unreachable_pub)]

mod backend;
mod config;
mod openai;

pub use backend::{BackendError, GenerationBackend};
pub use config::{BackendConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use openai::OpenAiBackend;
