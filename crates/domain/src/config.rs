//! Configuration structures for the telemetry subsystem

use serde::{Deserialize, Serialize};

/// Top-level telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Metric namespace prefix (metric families are `<namespace>_...`)
    pub namespace: String,
    /// Pull-based exposition endpoint settings
    pub exposition: ExpositionConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { namespace: "calculator".to_string(), exposition: ExpositionConfig::default() }
    }
}

/// Settings for the pull-based text exposition endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpositionConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Route serving the text exposition format
    pub metrics_path: String,
    /// Route serving the liveness payload
    pub health_path: String,
}

impl Default for ExpositionConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9090".to_string(),
            metrics_path: "/metrics".to_string(),
            health_path: "/health".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for telemetry configuration.
    use super::*;

    /// Validates default configuration values.
    ///
    /// Assertions:
    /// - Confirms the default namespace is `calculator`.
    /// - Confirms default exposition routes and bind address.
    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.namespace, "calculator");
        assert_eq!(config.exposition.bind_addr, "127.0.0.1:9090");
        assert_eq!(config.exposition.metrics_path, "/metrics");
        assert_eq!(config.exposition.health_path, "/health");
    }

    /// Validates partial TOML deserialization falls back to defaults.
    ///
    /// Assertions:
    /// - Confirms the overridden bind address is applied.
    /// - Confirms untouched fields keep their default values.
    #[test]
    fn test_partial_toml_overrides() {
        let config: TelemetryConfig = toml::from_str(
            r#"
            [exposition]
            bind_addr = "0.0.0.0:9100"
            "#,
        )
        .expect("partial config should deserialize");

        assert_eq!(config.exposition.bind_addr, "0.0.0.0:9100");
        assert_eq!(config.exposition.metrics_path, "/metrics");
        assert_eq!(config.namespace, "calculator");
    }
}
