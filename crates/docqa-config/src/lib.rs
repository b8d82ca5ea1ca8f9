//! Configuration management for docqa
//!
//! This crate provides a validated, layered configuration system:
//! - Multiple formats (YAML, TOML, JSON)
//! - Validation with helpful error messages
//! - Merging (file + environment)
//! - Credential lookup, with optional `.env` loading
//!
//! # Example
//!
//! ```no_run
//! use docqa_config::{Config, Credentials};
//!
//! // Load from default location (.docqa.{toml,yml,yaml,json}) plus DOCQA_* overrides
//! let config = Config::load()?;
//! let chunk_size = config.chunking.chunk_size;
//!
//! let credentials = Credentials::from_env();
//! # Ok::<(), docqa_config::ConfigError>(())
//! ```

pub mod credentials;
pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use credentials::{load_dotenv, Credentials, API_KEY_VAR};
pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
