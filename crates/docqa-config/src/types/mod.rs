//! Configuration type definitions
//!
//! Each section is self-contained with validation and defaults that
//! reproduce the stock pipeline behaviour.

pub mod chunking;
pub mod embedding;
pub mod llm;
pub mod retrieval;

pub use chunking::ChunkingConfig;
pub use embedding::EmbeddingConfig;
pub use llm::LlmConfig;
pub use retrieval::RetrievalConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Text splitting
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Embedding provider settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Chat completion settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Similarity search settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.chunking.validate()?;
        self.embedding.validate()?;
        self.llm.validate()?;
        self.retrieval.validate()?;

        Ok(())
    }
}
