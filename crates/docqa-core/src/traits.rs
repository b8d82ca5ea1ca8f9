use crate::models::ChatMessage;
use anyhow::{anyhow, Result};

/// Turns text into fixed-dimension vectors.
pub trait Embedder {
    /// One vector per input, in input order.
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_documents(&[text.to_string()])?
            .pop()
            .ok_or_else(|| anyhow!("Empty embedding response"))
    }
}

/// A chat-completion backend.
pub trait ChatModel {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
