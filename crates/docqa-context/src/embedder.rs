use anyhow::{anyhow, Context, Result};
use docqa_config::{Credentials, EmbeddingConfig};
use docqa_core::traits::Embedder;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Embeddings over the OpenAI `/embeddings` API, sent in batches.
pub struct OpenAiEmbedder {
    model: String,
    api_key: String,
    url: String,
    batch_size: usize,
    client: Client,
}

impl OpenAiEmbedder {
    pub fn new(config: &EmbeddingConfig, credentials: &Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for embeddings")?;

        Ok(Self {
            model: config.model_name.clone(),
            api_key: credentials.api_key().to_string(),
            url: crate::endpoint(config.api_base.as_deref(), "embeddings"),
            batch_size: config.batch_size.max(1),
            client,
        })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "input": texts,
            }))
            .send()
            .with_context(|| format!("Failed to call embeddings API at {}", self.url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(anyhow!("OpenAI embeddings failed ({}): {}", status, body));
        }

        let parsed: EmbeddingResponse = resp.json().context("Invalid embeddings response")?;
        into_vectors(parsed, texts.len())
    }
}

impl Embedder for OpenAiEmbedder {
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for (i, batch) in texts.chunks(self.batch_size).enumerate() {
            debug!("Embedding batch {} ({} texts) with {}", i, batch.len(), self.model);
            embeddings.extend(self.embed_batch(batch)?);
        }
        Ok(embeddings)
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

/// Order items by their `index` field (when present) and check the count.
fn into_vectors(response: EmbeddingResponse, expected: usize) -> Result<Vec<Vec<f32>>> {
    let mut items = response.data;
    if items.len() != expected {
        return Err(anyhow!(
            "Mismatch embedding count: got {}, expected {}",
            items.len(),
            expected
        ));
    }
    if items.iter().all(|item| item.index.is_some()) {
        items.sort_by_key(|item| item.index);
    }
    Ok(items.into_iter().map(|item| item.embedding).collect())
}
