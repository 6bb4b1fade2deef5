//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim copilot test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canonical claim narratives
//! - `builders`: Builder for pre-populated claim records
//! - `stubs`: Scripted collaborators and instrumented stages
//! - `assertions`: Custom assertion helpers for records and traces
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stubs;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stubs::*;
pub use assertions::*;
pub use generators::*;
