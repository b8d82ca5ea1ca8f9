//! Retrieval configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievalConfig {
    /// Number of chunks stuffed into the prompt for each question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl crate::validation::Validate for RetrievalConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("retrieval.top_k", self.top_k, 0)
    }
}

fn default_top_k() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_top_k() {
        let config = RetrievalConfig::default();
        assert_eq!(config.top_k, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_k_invalid() {
        assert!(RetrievalConfig { top_k: 0 }.validate().is_err());
    }
}
