//! Claim Intake Domain
//!
//! This crate turns a free-text claim narrative into structured fields, a
//! triage decision, validation issues and a summary. A single
//! [`ClaimRecord`] is threaded through a fixed sequence of stages, each of
//! which extends the record and leaves one entry in its audit trace.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> Extraction -> Validation -> Triage -> Summarization -> record
//! ```
//!
//! The runner checks [`ClaimRecord::is_complete`] after every stage and stops
//! early once the record is complete.

pub mod error;
pub mod field;
pub mod record;
pub mod parsing;
pub mod entities;
pub mod stage;
pub mod stages;
pub mod pipeline;
pub mod synthetic;

pub use error::ClaimError;
pub use field::{FieldValue, PolicyType, Priority, RequiredField};
pub use record::{ClaimRecord, TraceEntry};
pub use entities::PatternRecognizer;
pub use stage::Stage;
pub use stages::{ExtractionStage, SummarizationStage, TriageStage, ValidationStage};
pub use pipeline::{ClaimPipeline, RunPhase};
pub use synthetic::{SyntheticClaim, SyntheticGenerator};
