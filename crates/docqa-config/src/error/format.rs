//! Terminal rendering for [`ConfigError`]

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Renders a configuration error for the terminal, highlighting the
/// offending field and value when colours are available.
pub struct ErrorFormatter<'a> {
    error: &'a ConfigError,
    colors: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ConfigError) -> Self {
        Self {
            error,
            colors: colors_enabled(),
        }
    }

    /// Force colours on or off.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn format(&self) -> String {
        if !self.colors {
            return self.error.to_string();
        }

        let mark = "✗".red().bold();
        match self.error {
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!(
                "{mark} {} must be between {} and {}, got {}",
                field.cyan(),
                min.green(),
                max.green(),
                value.red()
            ),
            ConfigError::InvalidInteger { field, value, min } => format!(
                "{mark} {} must be > {}, got {}",
                field.cyan(),
                min.green(),
                value.red()
            ),
            ConfigError::ValidationError { field, message } => {
                format!("{mark} {}: {message}", field.cyan())
            }
            ConfigError::EnvVarError { var, message } => {
                format!("{mark} Failed to parse {}: {message}", var.yellow())
            }
            ConfigError::FileNotFound { path } => format!(
                "{mark} Configuration file not found: {}",
                path.display().to_string().yellow()
            ),
            other => format!("{mark} {other}"),
        }
    }
}

/// Colours only when stderr is a terminal and `NO_COLOR` is unset.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
