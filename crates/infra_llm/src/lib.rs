//! Language-Model Infrastructure
//!
//! Adapters implementing the `LanguageModel` port from `core_kernel`:
//!
//! - [`OpenAiResponder`]: calls an OpenAI-compatible chat-completions
//!   endpoint and falls back to a placeholder answer when the call fails
//! - [`DisabledResponder`]: answers every prompt with the placeholder, used
//!   when no API key is configured
//!
//! [`build_responder`] picks the right one from an [`LlmConfig`]. Neither
//! responder ever returns an error to the pipeline.

pub mod config;
pub mod error;
pub mod types;
pub mod client;
pub mod responder;

pub use config::LlmConfig;
pub use error::LlmError;
pub use client::ChatClient;
pub use responder::{build_responder, placeholder_answer, DisabledResponder, OpenAiResponder};
