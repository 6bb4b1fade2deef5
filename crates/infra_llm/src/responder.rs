//! `LanguageModel` adapters

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{CollaboratorStatus, LanguageModel, PortError, Prompt};

use crate::client::ChatClient;
use crate::config::LlmConfig;
use crate::types::ChatRequest;

/// Characters of the prompt echoed back in a placeholder answer
const PLACEHOLDER_PROMPT_CHARS: usize = 200;

/// Answer returned when the backend is disabled
///
/// Echoes the first 200 characters of the user prompt so demos still show
/// what would have been asked.
pub fn placeholder_answer(prompt: &Prompt) -> String {
    format!(
        "[LLM disabled] Would have answered based on: {:?}",
        prompt_head(prompt)
    )
}

fn unavailable_answer(prompt: &Prompt, err: &PortError) -> String {
    format!(
        "[LLM unavailable: {}] Would have answered based on: {:?}",
        err,
        prompt_head(prompt)
    )
}

fn prompt_head(prompt: &Prompt) -> String {
    prompt.user.chars().take(PLACEHOLDER_PROMPT_CHARS).collect()
}

/// Responder used when no API key is configured
#[derive(Debug, Clone)]
pub struct DisabledResponder {
    reason: String,
}

impl DisabledResponder {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for DisabledResponder {
    fn default() -> Self {
        Self::new("no API key configured")
    }
}

impl LanguageModel for DisabledResponder {
    fn respond(&self, prompt: &Prompt) -> String {
        placeholder_answer(prompt)
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::disabled(self.reason.clone())
    }
}

/// Responder backed by an OpenAI-compatible chat-completions endpoint
///
/// Failed calls are logged and answered with a placeholder; the pipeline
/// never sees an error.
#[derive(Debug, Clone)]
pub struct OpenAiResponder {
    client: ChatClient,
}

impl OpenAiResponder {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Sends the prompt and surfaces failures as port errors
    pub fn try_respond(&self, prompt: &Prompt) -> Result<String, PortError> {
        let request = ChatRequest::from_prompt(self.client.model(), prompt);
        self.client
            .chat_completion(&request)
            .map(|content| content.trim().to_string())
            .map_err(PortError::from)
    }
}

impl LanguageModel for OpenAiResponder {
    fn respond(&self, prompt: &Prompt) -> String {
        match self.try_respond(prompt) {
            Ok(answer) => answer,
            Err(err) => {
                warn!(
                    error = %err,
                    transient = err.is_transient(),
                    "Language model call failed; using placeholder answer"
                );
                unavailable_answer(prompt, &err)
            }
        }
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::Enabled
    }
}

/// Picks the responder for a configuration
///
/// A missing key or a client that cannot be built yields a
/// [`DisabledResponder`].
pub fn build_responder(config: &LlmConfig) -> Arc<dyn LanguageModel> {
    if config.usable_api_key().is_none() {
        warn!("No language-model API key configured; running with placeholder answers");
        return Arc::new(DisabledResponder::default());
    }

    match ChatClient::new(config) {
        Ok(client) => {
            info!(model = %config.model, "Language model enabled");
            Arc::new(OpenAiResponder::new(client))
        }
        Err(err) => {
            warn!(error = %err, "Language model client unavailable; running with placeholder answers");
            Arc::new(DisabledResponder::new(err.to_string()))
        }
    }
}
