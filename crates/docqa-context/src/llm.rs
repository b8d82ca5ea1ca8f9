use anyhow::{anyhow, Context, Result};
use docqa_config::{Credentials, LlmConfig};
use docqa_core::models::ChatMessage;
use docqa_core::traits::ChatModel;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Chat completions over the OpenAI `/chat/completions` API.
pub struct OpenAiChat {
    model: String,
    temperature: f32,
    api_key: String,
    url: String,
    client: Client,
}

impl OpenAiChat {
    pub fn new(config: &LlmConfig, credentials: &Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for chat completions")?;

        Ok(Self {
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: credentials.api_key().to_string(),
            url: crate::endpoint(config.api_base.as_deref(), "chat/completions"),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct ChatRespChoice {
    message: ChatRespMessage,
}

#[derive(Debug, Deserialize)]
struct ChatRespMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResp {
    choices: Vec<ChatRespChoice>,
}

impl ChatModel for OpenAiChat {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!("Requesting completion from {} ({} messages)", self.model, messages.len());
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
        });
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .with_context(|| format!("Failed to call chat completions API at {}", self.url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let txt = resp.text().unwrap_or_default();
            return Err(anyhow!("OpenAI error {}: {}", status, txt));
        }

        let parsed: ChatResp = resp.json().context("Invalid chat completion response")?;
        first_content(parsed)
    }
}

fn first_content(resp: ChatResp) -> Result<String> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No choices in response"))?;
    Ok(choice.message.content.unwrap_or_default())
}
