//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `DOCQA_<section>_<field>=value`
//!
//! Examples:
//! - `DOCQA_RETRIEVAL_TOP_K=8`
//! - `DOCQA_CHUNKING_CHUNK_SIZE=1000`
//! - `DOCQA_LLM_MODEL=gpt-4o-mini`

use crate::{error::ConfigError, types::*, Config, Result};
use std::env;
use std::str::FromStr;

const PREFIX: &str = "DOCQA_";

/// Parse configuration from environment variables
pub fn from_env() -> Result<Option<Config>> {
    from_vars(env::vars())
}

/// Build an overlay config from `(key, value)` pairs; keys without the
/// `DOCQA_` prefix are ignored.
pub fn from_vars<I>(vars: I) -> Result<Option<Config>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(k, _)| k.starts_with(PREFIX))
        .collect();

    if env_vars.is_empty() {
        return Ok(None);
    }

    let mut config = Config::default();
    for (key, value) in env_vars {
        apply_env_var(&mut config, &key, &value)?;
    }

    Ok(Some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = stripped.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: DOCQA_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "chunking" => apply_chunking_var(&mut config.chunking, key, &field, value),
        "embedding" => apply_embedding_var(&mut config.embedding, key, &field, value),
        "llm" => apply_llm_var(&mut config.llm, key, &field, value),
        "retrieval" => apply_retrieval_var(&mut config.retrieval, key, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn parse_value<T: FromStr>(var: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::EnvVarError {
        var: var.to_string(),
        message: format!("Invalid {}: {}", kind, value),
    })
}

fn unknown_field(var: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: var.to_string(),
        message: format!("Unknown field: {}", field),
    }
}

fn apply_chunking_var(config: &mut ChunkingConfig, var: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "separator" => config.separator = value.to_string(),
        "chunk_size" => config.chunk_size = parse_value(var, value, "integer")?,
        "chunk_overlap" => config.chunk_overlap = parse_value(var, value, "integer")?,
        _ => return Err(unknown_field(var, field)),
    }
    Ok(())
}

fn apply_embedding_var(config: &mut EmbeddingConfig, var: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "model_name" => config.model_name = value.to_string(),
        "batch_size" => config.batch_size = parse_value(var, value, "integer")?,
        "api_base" => config.api_base = Some(value.to_string()),
        "timeout_secs" => config.timeout_secs = parse_value(var, value, "integer")?,
        _ => return Err(unknown_field(var, field)),
    }
    Ok(())
}

fn apply_llm_var(config: &mut LlmConfig, var: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "model" => config.model = value.to_string(),
        "temperature" => config.temperature = parse_value(var, value, "float")?,
        "api_base" => config.api_base = Some(value.to_string()),
        "timeout_secs" => config.timeout_secs = parse_value(var, value, "integer")?,
        _ => return Err(unknown_field(var, field)),
    }
    Ok(())
}

fn apply_retrieval_var(config: &mut RetrievalConfig, var: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "top_k" => config.top_k = parse_value(var, value, "integer")?,
        _ => return Err(unknown_field(var, field)),
    }
    Ok(())
}
