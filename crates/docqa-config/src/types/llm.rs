//! LLM configuration

use serde::{Deserialize, Serialize};

/// Chat completion configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    /// Model name
    ///
    /// Examples: "gpt-3.5-turbo", "gpt-4o-mini"
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional API base URL override
    ///
    /// Use this to point to alternative OpenAI-compatible endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// HTTP timeout per request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            api_base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl crate::validation::Validate for LlmConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::{validate_api_base, validate_positive, validate_range};

        if self.model.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "llm.model".to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }

        validate_range("llm.temperature", self.temperature, 0.0, 2.0)?;
        validate_positive("llm.timeout_secs", self.timeout_secs as usize, 0)?;
        validate_api_base("llm.api_base", self.api_base.as_deref())?;

        Ok(())
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}
