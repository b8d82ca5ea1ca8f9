//! Embedding provider configuration

use serde::{Deserialize, Serialize};

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddingConfig {
    /// Model name sent to the embeddings endpoint
    ///
    /// Examples: "text-embedding-ada-002", "text-embedding-3-small"
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Maximum number of texts per embeddings request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Optional API base URL override for OpenAI-compatible endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// HTTP timeout per request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            batch_size: default_batch_size(),
            api_base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl crate::validation::Validate for EmbeddingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::{validate_api_base, validate_positive};

        if self.model_name.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "embedding.model_name".to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }

        validate_positive("embedding.batch_size", self.batch_size, 0)?;
        validate_positive("embedding.timeout_secs", self.timeout_secs as usize, 0)?;
        validate_api_base("embedding.api_base", self.api_base.as_deref())?;

        Ok(())
    }
}

fn default_model_name() -> String {
    "text-embedding-ada-002".to_string()
}

fn default_batch_size() -> usize {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}
