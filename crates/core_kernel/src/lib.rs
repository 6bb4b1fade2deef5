//! Core Kernel - Foundational types shared by the claim copilot crates
//!
//! This crate provides the building blocks used by every other crate:
//! - Strongly-typed identifiers for pipeline runs
//! - Common error types
//! - Port traits for the external collaborators consumed by the pipeline
//!   (entity recognition and language-model responses)

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::RunId;
pub use error::CoreError;
pub use ports::{
    CollaboratorStatus, DisabledRecognizer, Entity, EntityLabel, EntityRecognizer,
    LanguageModel, PortError, Prompt,
};
