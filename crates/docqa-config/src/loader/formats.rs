//! Deserialisation of configuration text, one arm per supported format

use super::ConfigFormat;
use crate::{error::ConfigError, Config, Result};

/// Parse `content` as `format`. `path` only labels parse errors.
pub fn parse(format: ConfigFormat, content: &str, path: Option<&str>) -> Result<Config> {
    match format {
        ConfigFormat::Toml => {
            ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::from_json_error(e, content, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_settings_in_every_format() {
        let sources = [
            (ConfigFormat::Toml, "[retrieval]\ntop_k = 3\n\n[chunking]\nseparator = \"\\n\"\n"),
            (ConfigFormat::Yaml, "retrieval:\n  top_k: 3\nchunking:\n  separator: \"\\n\"\n"),
            (
                ConfigFormat::Json,
                r#"{"retrieval": {"top_k": 3}, "chunking": {"separator": "\n"}}"#,
            ),
        ];

        for (format, content) in sources {
            let config = parse(format, content, None).unwrap();
            assert_eq!(config.retrieval.top_k, 3, "{:?}", format);
            assert_eq!(config.chunking.separator, "\n", "{:?}", format);
            assert_eq!(config.chunking.chunk_size, 1500, "{:?}", format);
        }
    }

    #[test]
    fn test_empty_documents_use_defaults() {
        assert_eq!(parse(ConfigFormat::Toml, "", None).unwrap(), Config::default());
        assert_eq!(parse(ConfigFormat::Yaml, "{}", None).unwrap(), Config::default());
        assert_eq!(parse(ConfigFormat::Json, "{}", None).unwrap(), Config::default());
    }

    #[test]
    fn test_toml_type_error_names_file() {
        let toml = "[chunking]\nchunk_size = \"big\"\n";
        let rendered = parse(ConfigFormat::Toml, toml, Some(".docqa.toml"))
            .unwrap_err()
            .to_string();
        assert!(rendered.contains(".docqa.toml"));
        assert!(rendered.contains("chunk_size"));
    }

    #[test]
    fn test_yaml_and_json_type_errors() {
        let yaml = parse(ConfigFormat::Yaml, "retrieval:\n  top_k: many\n", None).unwrap_err();
        assert!(matches!(yaml, ConfigError::YamlError { .. }));

        let json = parse(ConfigFormat::Json, r#"{"embedding": {"batch_size": -1}}"#, None).unwrap_err();
        assert!(matches!(json, ConfigError::JsonError { .. }));
    }
}
