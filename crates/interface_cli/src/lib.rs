//! Claim Copilot command-line interface
//!
//! Wires configuration, collaborators and the claim pipeline together and
//! presents results in the terminal.
//!
//! # Modules
//!
//! - `cli`: Argument definitions
//! - `config`: Environment-driven configuration
//! - `app`: Pipeline construction and the per-claim run
//! - `input`: Claim text readers (pasted, file, stdin)
//! - `display`: Section-by-section report rendering
//! - `export`: JSON persistence of finished records
//! - `dataset`: Synthetic dataset export
//! - `menu`: Interactive session

pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod menu;

pub use app::Copilot;
pub use cli::{Cli, Command};
pub use config::{CopilotConfig, RecognizerKind};
pub use error::CliError;
