use anyhow::{Context, Result};
use docqa_core::models::{ChatMessage, ScoredChunk};
use docqa_core::traits::{ChatModel, Embedder};
use docqa_index::VectorIndex;
use tracing::{debug, error};

/// System prompt for the "stuff" strategy; `{context}` receives the
/// retrieved chunks.
pub const STUFF_PROMPT: &str = "Use the following pieces of context to answer the user's question. \nIf you don't know the answer, just say that you don't know, don't try to make up an answer.\n----------------\n{context}";

/// Returned in place of an answer when a question could not be processed.
pub const ANSWER_FAILED: &str = "An error occurred while processing your question.";

/// Anything that can turn a question into an answer string.
pub trait Answerer {
    fn answer(&self, question: &str) -> String;
}

/// Retrieval-augmented question answering over a fixed index.
pub struct RetrievalQa {
    index: VectorIndex,
    embedder: Box<dyn Embedder>,
    chat: Box<dyn ChatModel>,
    top_k: usize,
}

impl RetrievalQa {
    pub fn new(
        index: VectorIndex,
        embedder: Box<dyn Embedder>,
        chat: Box<dyn ChatModel>,
        top_k: usize,
    ) -> Self {
        Self {
            index,
            embedder,
            chat,
            top_k,
        }
    }

    pub fn retrieve(&self, question: &str) -> Result<Vec<ScoredChunk>> {
        let hits = self
            .index
            .similarity_search(question, self.top_k, self.embedder.as_ref())?;
        Ok(hits)
    }

    pub fn try_answer(&self, question: &str) -> Result<String> {
        let hits = self.retrieve(question)?;
        debug!(
            "Stuffing {} chunks (ids: {:?})",
            hits.len(),
            hits.iter().map(|h| h.chunk.id.as_str()).collect::<Vec<_>>()
        );
        let messages = build_messages(&hits, question);
        self.chat
            .complete(&messages)
            .context("chat completion failed")
    }
}

impl Answerer for RetrievalQa {
    fn answer(&self, question: &str) -> String {
        match self.try_answer(question) {
            Ok(answer) => answer,
            Err(e) => {
                error!("Question answering failed: {:#}", e);
                println!("Error during question answering: {:#}", e);
                ANSWER_FAILED.to_string()
            }
        }
    }
}

pub fn build_messages(hits: &[ScoredChunk], question: &str) -> Vec<ChatMessage> {
    let context = hits
        .iter()
        .map(|h| h.chunk.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    vec![
        ChatMessage::system(STUFF_PROMPT.replace("{context}", &context)),
        ChatMessage::user(question),
    ]
}
