//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable          | Values           | Default |
//! |-------------------|------------------|---------|
//! | `SHOPCART_FORMAT` | `html`, `json`   | `html`  |
//! | `RUST_LOG`        | tracing filter   | `info`  |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// How the cart is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Storefront page fragment.
    #[default]
    Html,
    /// Pretty-printed cart summary.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("SHOPCART_FORMAT".to_string())),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Output format
    pub format: OutputFormat,

    /// Tracing filter (`RUST_LOG`, default `info`)
    pub log_filter: String,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("SHOPCART_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(DemoConfig { format, log_filter })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_json_format() {
        let config =
            DemoConfig::from_lookup(lookup_from(&[("SHOPCART_FORMAT", " JSON ")])).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_log_filter_override() {
        let config =
            DemoConfig::from_lookup(lookup_from(&[("RUST_LOG", "shopcart_core=debug")])).unwrap();
        assert_eq!(config.log_filter, "shopcart_core=debug");
    }

    #[test]
    fn test_invalid_format() {
        let err = DemoConfig::from_lookup(lookup_from(&[("SHOPCART_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOPCART_FORMAT");
    }
}
