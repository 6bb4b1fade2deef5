//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim text is empty")]
    EmptyInput,

    #[error("Claim record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
