use crate::distance::{distance_to_score, euclidean_distance_squared};
use docqa_core::models::{Chunk, ScoredChunk};
use docqa_core::traits::Embedder;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("embedding request failed: {0:#}")]
    Embedding(anyhow::Error),

    #[error("Mismatch embedding count: got {got}, expected {expected}")]
    CountMismatch { expected: usize, got: usize },

    #[error("embedding {position} has dimension {got}, expected {expected}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        got: usize,
    },
}

/// Exact nearest-neighbour index over chunk embeddings, held in memory.
///
/// Built once from the full chunk set; there are no insert or delete
/// operations, so results for a given query never change for the
/// lifetime of the index.
#[derive(Debug)]
pub struct VectorIndex {
    chunks: Vec<Chunk>,
    dimension: usize,
}

impl VectorIndex {
    /// Embed `texts` and index them in order.
    pub fn from_texts(texts: &[String], embedder: &dyn Embedder) -> Result<Self, IndexError> {
        let chunks = texts
            .iter()
            .enumerate()
            .map(|(index, text)| Chunk::new(index, text.clone()))
            .collect();
        Self::from_chunks(chunks, embedder)
    }

    /// Embed every chunk's content and index the results.
    pub fn from_chunks(mut chunks: Vec<Chunk>, embedder: &dyn Embedder) -> Result<Self, IndexError> {
        if chunks.is_empty() {
            return Ok(Self {
                chunks,
                dimension: 0,
            });
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = embedder
            .embed_documents(&texts)
            .map_err(IndexError::Embedding)?;

        if embeddings.len() != chunks.len() {
            return Err(IndexError::CountMismatch {
                expected: chunks.len(),
                got: embeddings.len(),
            });
        }

        let dimension = embeddings[0].len();
        for (position, (chunk, embedding)) in chunks.iter_mut().zip(embeddings).enumerate() {
            if embedding.len() != dimension {
                return Err(IndexError::DimensionMismatch {
                    position,
                    expected: dimension,
                    got: embedding.len(),
                });
            }
            chunk.embedding = Some(embedding);
        }

        info!(
            "Indexed {} chunks with {}-dimensional embeddings",
            chunks.len(),
            dimension
        );
        Ok(Self { chunks, dimension })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The `limit` chunks closest to `query_vector`, nearest first.
    ///
    /// Equal distances keep creation order.
    pub fn search(&self, query_vector: &[f32], limit: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        if self.chunks.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        if query_vector.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                position: 0,
                expected: self.dimension,
                got: query_vector.len(),
            });
        }

        let mut scored: Vec<(f32, &Chunk)> = self
            .chunks
            .iter()
            .filter_map(|chunk| {
                chunk
                    .embedding
                    .as_deref()
                    .map(|embedding| (euclidean_distance_squared(query_vector, embedding), chunk))
            })
            .collect();

        scored.sort_by(|(da, a), (db, b)| {
            da.partial_cmp(db)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        scored.truncate(limit);

        Ok(scored
            .into_iter()
            .map(|(distance, chunk)| {
                let mut chunk = chunk.clone();
                chunk.embedding = None;
                ScoredChunk {
                    chunk,
                    distance,
                    score: distance_to_score(distance),
                }
            })
            .collect())
    }

    /// Embed `query` and return its `limit` nearest chunks.
    pub fn similarity_search(
        &self,
        query: &str,
        limit: usize,
        embedder: &dyn Embedder,
    ) -> Result<Vec<ScoredChunk>, IndexError> {
        let query_vector = embedder.embed_query(query).map_err(IndexError::Embedding)?;
        let results = self.search(&query_vector, limit)?;
        debug!(
            "Retrieved {} chunks for query ({} chars)",
            results.len(),
            query.chars().count()
        );
        Ok(results)
    }
}
