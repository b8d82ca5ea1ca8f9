//! Text chunking configuration

use serde::{Deserialize, Serialize};

/// Configuration for the character splitter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Separator the text is cut at before pieces are merged into chunks
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Maximum characters per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters of trailing context carried into the next chunk
    ///
    /// Must be smaller than `chunk_size`.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl crate::validation::Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_positive;

        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "chunking.separator".to_string(),
                message: "Separator cannot be empty".to_string(),
            });
        }

        validate_positive("chunking.chunk_size", self.chunk_size, 0)?;

        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::ValidationError {
                field: "chunking.chunk_overlap".to_string(),
                message: format!(
                    "chunk_overlap ({}) must be < chunk_size ({})",
                    self.chunk_overlap, self.chunk_size
                ),
            });
        }

        Ok(())
    }
}

fn default_separator() -> String {
    ".".to_string()
}

fn default_chunk_size() -> usize {
    1500
}

fn default_chunk_overlap() -> usize {
    300
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.separator, ".");
        assert_eq!(config.chunk_size, 1500);
        assert_eq!(config.chunk_overlap, 300);
    }

    #[test]
    fn test_overlap_too_large() {
        let config = ChunkingConfig {
            chunk_size: 100,
            chunk_overlap: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_separator_invalid() {
        let config = ChunkingConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
