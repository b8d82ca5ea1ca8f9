//! Validation for configuration sections

use crate::error::{ConfigError, Result};

/// Checks run after a configuration has been fully merged.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// `value` must lie in `min..=max`.
pub fn validate_range(field: impl Into<String>, value: f32, min: f32, max: f32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        })
    }
}

/// `value` must be strictly greater than `min`.
pub fn validate_positive(field: impl Into<String>, value: usize, min: usize) -> Result<()> {
    if value > min {
        Ok(())
    } else {
        Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        })
    }
}

/// An `api_base` override, when present, must be a non-empty http(s) URL.
pub fn validate_api_base(field: &str, api_base: Option<&str>) -> Result<()> {
    let message = match api_base {
        None => return Ok(()),
        Some("") => "API base URL cannot be empty string (omit it to use the default)".to_string(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => return Ok(()),
        Some(url) => format!("API base must start with http:// or https://, got: {}", url),
    };
    Err(ConfigError::ValidationError {
        field: field.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bounds() {
        assert!(validate_range("llm.temperature", 0.0, 0.0, 2.0).is_ok());
        assert!(validate_range("llm.temperature", 2.0, 0.0, 2.0).is_ok());
        assert!(validate_range("llm.temperature", 2.5, 0.0, 2.0).is_err());
        assert!(validate_range("llm.temperature", -0.1, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_top_k_must_be_positive() {
        assert!(validate_positive("retrieval.top_k", 5, 0).is_ok());
        let err = validate_positive("retrieval.top_k", 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "retrieval.top_k must be > 0, got 0");
    }

    #[test]
    fn test_api_base() {
        assert!(validate_api_base("llm.api_base", None).is_ok());
        assert!(validate_api_base("llm.api_base", Some("https://api.openai.com/v1")).is_ok());
        assert!(validate_api_base("llm.api_base", Some("http://localhost:8080/v1")).is_ok());
        assert!(validate_api_base("llm.api_base", Some("")).is_err());
        assert!(validate_api_base("llm.api_base", Some("not-a-url")).is_err());
    }
}
