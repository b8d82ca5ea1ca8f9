//! Section-by-section merge of two configurations

use crate::{types::*, Config};

/// Merge `overlay` onto `base`. Fields in `overlay` that still hold their
/// default value leave `base` untouched.
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.chunking = merge_chunking(base.chunking, overlay.chunking);
    base.embedding = merge_embedding(base.embedding, overlay.embedding);
    base.llm = merge_llm(base.llm, overlay.llm);
    base.retrieval = merge_retrieval(base.retrieval, overlay.retrieval);

    base
}

fn pick<T: PartialEq>(base: T, overlay: T, default: T) -> T {
    if overlay != default {
        overlay
    } else {
        base
    }
}

fn merge_chunking(base: ChunkingConfig, overlay: ChunkingConfig) -> ChunkingConfig {
    let default = ChunkingConfig::default();
    ChunkingConfig {
        separator: pick(base.separator, overlay.separator, default.separator),
        chunk_size: pick(base.chunk_size, overlay.chunk_size, default.chunk_size),
        chunk_overlap: pick(base.chunk_overlap, overlay.chunk_overlap, default.chunk_overlap),
    }
}

fn merge_embedding(base: EmbeddingConfig, overlay: EmbeddingConfig) -> EmbeddingConfig {
    let default = EmbeddingConfig::default();
    EmbeddingConfig {
        model_name: pick(base.model_name, overlay.model_name, default.model_name),
        batch_size: pick(base.batch_size, overlay.batch_size, default.batch_size),
        api_base: overlay.api_base.or(base.api_base),
        timeout_secs: pick(base.timeout_secs, overlay.timeout_secs, default.timeout_secs),
    }
}

fn merge_llm(base: LlmConfig, overlay: LlmConfig) -> LlmConfig {
    let default = LlmConfig::default();
    LlmConfig {
        model: pick(base.model, overlay.model, default.model),
        temperature: if (overlay.temperature - default.temperature).abs() > 0.001 {
            overlay.temperature
        } else {
            base.temperature
        },
        api_base: overlay.api_base.or(base.api_base),
        timeout_secs: pick(base.timeout_secs, overlay.timeout_secs, default.timeout_secs),
    }
}

fn merge_retrieval(base: RetrievalConfig, overlay: RetrievalConfig) -> RetrievalConfig {
    let default = RetrievalConfig::default();
    RetrievalConfig {
        top_k: pick(base.top_k, overlay.top_k, default.top_k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overlay_wins_when_not_default() {
        let mut base = Config::default();
        base.retrieval.top_k = 8;
        base.llm.model = "gpt-4o".to_string();

        let mut overlay = Config::default();
        overlay.retrieval.top_k = 2;

        let merged = merge(base, overlay);
        assert_eq!(merged.retrieval.top_k, 2);
        assert_eq!(merged.llm.model, "gpt-4o");
    }

    #[test]
    fn test_default_overlay_keeps_base() {
        let mut base = Config::default();
        base.chunking.chunk_size = 900;
        base.chunking.chunk_overlap = 90;
        base.embedding.api_base = Some("http://localhost:8080/v1".to_string());

        let merged = merge(base.clone(), Config::default());
        assert_eq!(merged, base);
    }
}
