//! Collaborator Ports
//!
//! The claim pipeline consumes two external capabilities it does not
//! implement itself: an entity recognizer and a language-model responder.
//! Each is declared here as a port trait so stages depend only on
//! `core_kernel`, while adapters live in their own crates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Pipeline Stages (domain_claims)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Port Traits (EntityRecognizer, LanguageModel)       │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │ Pattern recognizer │     │  Chat responder  │
//!         │  (domain_claims)   │     │   (infra_llm)    │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! Handles are created once per process and shared read-only behind `Arc`,
//! which is why every port requires `Send + Sync`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// The collaborator is switched off or failed to initialize
    #[error("Collaborator disabled: {reason}")]
    Disabled {
        reason: String,
    },

    /// A data transformation error occurred
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>, duration_ms: u64) -> Self {
        PortError::Timeout {
            operation: operation.into(),
            duration_ms,
        }
    }

    /// Creates a Disabled error
    pub fn disabled(reason: impl Into<String>) -> Self {
        PortError::Disabled {
            reason: reason.into(),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if the failure came from an unreachable or slow backend
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. } | PortError::Timeout { .. })
    }
}

/// Whether a collaborator is able to do real work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CollaboratorStatus {
    Enabled,
    Disabled { reason: String },
}

impl CollaboratorStatus {
    pub fn disabled(reason: impl Into<String>) -> Self {
        CollaboratorStatus::Disabled {
            reason: reason.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CollaboratorStatus::Enabled)
    }
}

// ============================================================================
// Entity recognition
// ============================================================================

/// Label attached to a recognized span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    #[serde(rename = "PER")]
    Person,
    #[serde(rename = "ORG")]
    Organization,
    #[serde(rename = "LOC")]
    Location,
    #[serde(rename = "MISC")]
    Misc,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PER",
            EntityLabel::Organization => "ORG",
            EntityLabel::Location => "LOC",
            EntityLabel::Misc => "MISC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled text span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn person(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Person)
    }
}

/// Finds named entities in free text
///
/// Callers treat an `Err` the same as an empty result; the error only exists
/// so the reason can be logged.
pub trait EntityRecognizer: Send + Sync {
    /// Returns the entities found in `text`, in order of appearance
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, PortError>;

    /// Reports whether the recognizer is operational
    fn status(&self) -> CollaboratorStatus;
}

/// Recognizer used when entity recognition is switched off
#[derive(Debug, Clone, Default)]
pub struct DisabledRecognizer;

impl EntityRecognizer for DisabledRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, PortError> {
        Ok(Vec::new())
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::disabled("entity recognition disabled by configuration")
    }
}

// ============================================================================
// Language model
// ============================================================================

/// A single-turn request to a language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// User message
    pub user: String,
    /// Optional system instruction
    pub system: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
}

impl Prompt {
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;

    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            system: None,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Produces a free-text answer for a prompt
///
/// Implementations never fail towards the caller: when no backend is
/// configured or reachable they answer with a deterministic placeholder
/// string instead.
pub trait LanguageModel: Send + Sync {
    fn respond(&self, prompt: &Prompt) -> String;

    /// Reports whether answers come from a real backend
    fn status(&self) -> CollaboratorStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::timeout("chat_completion", 5000);
        assert!(timeout.is_transient());
        assert_eq!(timeout.to_string(), "Timeout after 5000ms: chat_completion");
        assert!(PortError::connection("refused").is_transient());
        assert!(!PortError::disabled("no key").is_transient());
    }

    #[test]
    fn test_port_error_display() {
        let error = PortError::disabled("model failed to load");
        assert!(error.to_string().contains("model failed to load"));
    }

    #[test]
    fn test_entity_label_serializes_short_code() {
        let json = serde_json::to_string(&Entity::person("Jane Smith")).unwrap();
        assert_eq!(json, r#"{"text":"Jane Smith","label":"PER"}"#);
    }

    #[test]
    fn test_disabled_recognizer_finds_nothing() {
        let recognizer = DisabledRecognizer;
        assert!(recognizer.recognize("Jane Smith").unwrap().is_empty());
        assert!(!recognizer.status().is_enabled());
    }

    #[test]
    fn test_prompt_builder() {
        let prompt = Prompt::new("hello")
            .with_system("be brief")
            .with_temperature(0.3);

        assert_eq!(prompt.user, "hello");
        assert_eq!(prompt.system.as_deref(), Some("be brief"));
        assert_eq!(prompt.temperature, 0.3);
    }
}
