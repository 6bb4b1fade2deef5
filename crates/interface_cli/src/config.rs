//! CLI configuration

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use core_kernel::CoreError;
use infra_llm::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use infra_llm::LlmConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "COPILOT";

/// Fallback variable for the API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 60;

/// Entity recognizer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    Pattern,
    Disabled,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CopilotConfig {
    /// Language-model API key; unset runs in degraded mode
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Chat model name
    pub model: String,
    /// API root of the chat-completions backend
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Entity recognizer to use
    pub recognizer: RecognizerKind,
    /// Directory `claim_result.json` is written to
    pub output_dir: PathBuf,
    /// Whether finished records are saved
    pub save_output: bool,
    /// Log level
    pub log_level: String,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS as u64,
            recognizer: RecognizerKind::Pattern,
            output_dir: PathBuf::from("outputs"),
            save_output: true,
            log_level: "info".to_string(),
        }
    }
}

impl CopilotConfig {
    /// Loads configuration from `COPILOT_*` variables, falling back to
    /// `OPENAI_API_KEY` for the key
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(
            Environment::with_prefix(ENV_PREFIX),
            std::env::var(OPENAI_API_KEY_VAR).ok(),
        )
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(
        environment: Environment,
        fallback_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("model", defaults.model)?
            .set_default("base_url", defaults.base_url)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("recognizer", "pattern")?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("save_output", defaults.save_output)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(key) = fallback_api_key {
            builder = builder.set_default("openai_api_key", key)?;
        }

        builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.model.trim().is_empty() {
            return Err(CoreError::configuration("model must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::configuration(
                "request_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Language-model settings derived from this configuration
    pub fn to_llm_config(&self) -> LlmConfig {
        let mut llm = LlmConfig::default()
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs));
        if let Some(key) = &self.openai_api_key {
            llm = llm.with_api_key(key.clone());
        }
        llm
    }

    /// Output directory, or `None` when saving is switched off
    pub fn save_dir(&self) -> Option<PathBuf> {
        self.save_output.then(|| self.output_dir.clone())
    }
}
