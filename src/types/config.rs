//! Configuration structures.
//!
//! The host delivers bridge options over the same boundary the events
//! travel, as a JSON document. Every field is defaulted so a partial (or
//! absent) document is always usable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::Result;

/// Global bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct Config {
    /// Element identifier resolution.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Decode a configuration document received from the host.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Element identifier resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Fall back to the element's `id` attribute when it has no `name`.
    pub fallback_to_id: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_to_id: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.resolver.fallback_to_id);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn partial_document_overrides_one_section() {
        let config = Config::from_json(r#"{"resolver":{"fallback_to_id":false}}"#).unwrap();
        assert!(!config.resolver.fallback_to_id);
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Config::from_json("{resolver").is_err());
    }
}
