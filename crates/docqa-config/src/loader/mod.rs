//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
}

/// File names probed by [`Config::load`], in order
pub const DEFAULT_PATHS: [&str; 4] = [".docqa.toml", ".docqa.yml", ".docqa.yaml", ".docqa.json"];

/// Builder for loading and merging configurations
///
/// Precedence: defaults < file < environment
///
/// # Example
///
/// ```no_run
/// use docqa_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".docqa.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), docqa_config::error::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Create a new config builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add environment variable overlay
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Build and validate the final configuration
    ///
    /// Merges all sources in order, with later sources taking precedence.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    let file_config = file::load_from_file(&path)?;
                    config = merge::merge(config, file_config);
                }
                ConfigSource::Environment => {
                    if let Some(env_config) = env::from_env()? {
                        config = merge::merge(config, env_config);
                    }
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Uses the first of [`DEFAULT_PATHS`] that exists in the working
    /// directory, then applies `DOCQA_*` environment overlays. Without a
    /// file the defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same as [`Config::load`], probing `dir` instead of the working directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_PATHS
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
        {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builder_default() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_builder_with_env() {
        env::set_var("DOCQA_RETRIEVAL_TOP_K", "7");
        let config = ConfigBuilder::new().with_env().build().unwrap();
        env::remove_var("DOCQA_RETRIEVAL_TOP_K");
        assert_eq!(config.retrieval.top_k, 7);
    }

    #[test]
    fn test_load_from_dir_prefers_toml() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".docqa.toml"),
            "[chunking]\nchunk_size = 800\nchunk_overlap = 100\n",
        )
        .unwrap();
        fs::write(dir.path().join(".docqa.json"), r#"{"chunking": {"chunk_size": 900}}"#)
            .unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 800);
        assert_eq!(config.chunking.chunk_overlap, 100);
    }

    #[test]
    fn test_load_from_empty_dir_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.chunking, Config::default().chunking);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".docqa.toml");
        fs::write(&path, "[llm]\nmodel = \"gpt-4o-mini\"\ntimeout_secs = 30\n").unwrap();

        env::set_var("DOCQA_LLM_TIMEOUT_SECS", "90");
        let config = ConfigBuilder::new().with_file(&path).with_env().build();
        env::remove_var("DOCQA_LLM_TIMEOUT_SECS");

        let config = config.unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.timeout_secs, 90);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".docqa.yml");
        fs::write(&path, "chunking:\n  chunk_size: 10\n  chunk_overlap: 20\n").unwrap();
        assert!(ConfigBuilder::new().with_file(&path).build().is_err());
    }
}
