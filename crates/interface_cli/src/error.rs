//! CLI error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_claims::ClaimError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl CliError {
    /// True when the operator interrupted a prompt
    pub fn is_interrupt(&self) -> bool {
        match self {
            CliError::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            CliError::Prompt(dialoguer::Error::IO(e)) => e.kind() == std::io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}
