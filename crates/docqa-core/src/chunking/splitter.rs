use anyhow::{ensure, Result};
use docqa_config::ChunkingConfig;
use tracing::{debug, warn};

/// Splits text at a fixed separator and greedily packs the pieces into
/// chunks of at most `chunk_size` characters, carrying up to
/// `chunk_overlap` characters of trailing pieces into the next chunk.
///
/// Lengths are counted in `char`s. A single piece longer than
/// `chunk_size` is emitted on its own, oversized.
#[derive(Debug, Clone)]
pub struct CharacterSplitter {
    separator: String,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl CharacterSplitter {
    pub fn new(separator: impl Into<String>, chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        let separator = separator.into();
        ensure!(!separator.is_empty(), "separator cannot be empty");
        ensure!(chunk_size > 0, "chunk_size must be > 0");
        ensure!(
            chunk_overlap < chunk_size,
            "chunk_overlap ({}) must be < chunk_size ({})",
            chunk_overlap,
            chunk_size
        );

        Ok(Self {
            separator,
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(
            config.separator.clone(),
            config.chunk_size,
            config.chunk_overlap,
        )
    }

    /// Split `text` into trimmed, non-empty chunks in document order.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let pieces: Vec<&str> = text
            .split(self.separator.as_str())
            .filter(|piece| !piece.is_empty())
            .collect();

        let chunks = self.merge_pieces(&pieces);
        debug!(
            "Split {} pieces into {} chunks (size {}, overlap {})",
            pieces.len(),
            chunks.len(),
            self.chunk_size,
            self.chunk_overlap
        );
        chunks
    }

    fn merge_pieces(&self, pieces: &[&str]) -> Vec<String> {
        let sep_len = self.separator.chars().count();
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        // length of `current` joined with the separator
        let mut total = 0usize;

        for &piece in pieces {
            let len = piece.chars().count();
            let joined = |current: &[&str], total: usize| {
                total + len + if current.is_empty() { 0 } else { sep_len }
            };

            if joined(&current, total) > self.chunk_size {
                if total > self.chunk_size {
                    warn!(
                        "Created a chunk of size {}, which is longer than the specified {}",
                        total, self.chunk_size
                    );
                }

                if !current.is_empty() {
                    if let Some(chunk) = self.join(&current) {
                        chunks.push(chunk);
                    }

                    while total > self.chunk_overlap
                        || (total > 0 && joined(&current, total) > self.chunk_size)
                    {
                        let dropped = current.remove(0);
                        total -= dropped.chars().count() + if current.is_empty() { 0 } else { sep_len };
                    }
                }
            }

            current.push(piece);
            total += len + if current.len() > 1 { sep_len } else { 0 };
        }

        if total > self.chunk_size {
            warn!(
                "Created a chunk of size {}, which is longer than the specified {}",
                total, self.chunk_size
            );
        }
        if let Some(chunk) = self.join(&current) {
            chunks.push(chunk);
        }

        chunks
    }

    fn join(&self, pieces: &[&str]) -> Option<String> {
        let text = pieces.join(&self.separator);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl Default for CharacterSplitter {
    fn default() -> Self {
        let config = ChunkingConfig::default();
        Self {
            separator: config.separator,
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}
