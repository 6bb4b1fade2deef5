//! Language-model client errors

use thiserror::Error;

use core_kernel::PortError;

/// Result type for chat client operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Chat client errors
#[derive(Debug, Error)]
pub enum LlmError {
    /// Missing API key or invalid client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// No complete response within the configured request timeout
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Non-2xx response from the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<LlmError> for PortError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Config(message) => PortError::disabled(message),
            LlmError::Network(message) => PortError::connection(message),
            LlmError::Timeout { duration_ms } => PortError::timeout("chat_completion", duration_ms),
            LlmError::Api { status: 401 | 403, message } => PortError::Unauthorized { message },
            LlmError::Api { status, message } => {
                PortError::internal(format!("status {}: {}", status, message))
            }
            LlmError::Parse(message) => PortError::transformation(message),
        }
    }
}
