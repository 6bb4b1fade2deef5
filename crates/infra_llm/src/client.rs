//! Blocking chat-completions client

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::error::{LlmError, Result};
use crate::types::{ChatRequest, ChatResponseRaw};

/// Minimal client for an OpenAI-compatible chat-completions endpoint
#[derive(Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    request_timeout: Duration,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Creates a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` when no API key is set or the HTTP client
    /// cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .usable_api_key()
            .ok_or_else(|| LlmError::Config("API key not set".into()))?
            .to_string();

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            model: config.model.clone(),
            endpoint: config.chat_completions_url(),
            request_timeout: config.request_timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat completion and returns the first choice's content
    pub fn chat_completion(&self, request: &ChatRequest) -> Result<String> {
        let start = Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Chat completion request failed");
                self.transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponseRaw = response.json().map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                LlmError::Parse(e.to_string())
            }
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::Parse("No content in chat completion".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis() as u64,
            "Chat completion"
        );

        Ok(content)
    }

    fn transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout {
                duration_ms: self.request_timeout.as_millis() as u64,
            }
        } else {
            LlmError::Network(err.to_string())
        }
    }
}
