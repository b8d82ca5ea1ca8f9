//! API credential lookup
//!
//! The embedding and chat providers share a single key read from
//! `OPENAI_API_KEY`. A `.env` file in the working directory may supply it;
//! variables already present in the process environment take precedence.

use std::env;
use std::path::PathBuf;

/// Name of the environment variable holding the provider API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Provider credentials resolved at startup
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Read the API key from the environment. Unset or empty means missing.
    pub fn from_env() -> Option<Self> {
        Self::from_value(env::var(API_KEY_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Option<Self> {
        value
            .filter(|key| !key.is_empty())
            .map(|api_key| Self { api_key })
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Load `.env` from the working directory (or a parent) if one exists.
///
/// Returns the path that was loaded. A missing file is not an error; a file
/// that exists but cannot be parsed is reported and otherwise ignored.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => {
            eprintln!("Warning: failed to load .env file: {}", err);
            None
        }
    }
}
