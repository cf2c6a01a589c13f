//! Configuration loader
//!
//! Loads telemetry configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from a TOML file
//! 3. If no file is found, uses the built-in defaults
//!
//! ## Environment Variables
//! - `CALCMETRICS_EXPOSITION_ADDR`: Exposition bind address (required
//!   for env-based loading)
//! - `CALCMETRICS_NAMESPACE`: Metric namespace prefix
//! - `CALCMETRICS_METRICS_PATH`: Exposition route
//! - `CALCMETRICS_HEALTH_PATH`: Liveness route
//!
//! ## File Locations
//! The loader probes `./calcmetrics.toml`, then `./config.toml`.

use std::path::{Path, PathBuf};

use calcmetrics_domain::{Result, TelemetryConfig, TelemetryError};

const ENV_EXPOSITION_ADDR: &str = "CALCMETRICS_EXPOSITION_ADDR";
const ENV_NAMESPACE: &str = "CALCMETRICS_NAMESPACE";
const ENV_METRICS_PATH: &str = "CALCMETRICS_METRICS_PATH";
const ENV_HEALTH_PATH: &str = "CALCMETRICS_HEALTH_PATH";

const PROBE_PATHS: [&str; 2] = ["calcmetrics.toml", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from a probed
/// config file, and finally falls back to the built-in defaults.
#[must_use]
pub fn load() -> TelemetryConfig {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Telemetry configuration loaded from environment variables");
            config
        }
        Err(env_error) => {
            tracing::debug!(error = ?env_error, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Ok(config) => config,
                Err(file_error) => {
                    tracing::debug!(error = ?file_error, "No config file, using defaults");
                    TelemetryConfig::default()
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `CALCMETRICS_EXPOSITION_ADDR` must be present; the remaining
/// variables override defaults when set.
///
/// # Errors
/// Returns `TelemetryError::Config` if the required variable is missing.
pub fn load_from_env() -> Result<TelemetryConfig> {
    let bind_addr = std::env::var(ENV_EXPOSITION_ADDR).map_err(|_| {
        TelemetryError::Config(format!("missing environment variable {ENV_EXPOSITION_ADDR}"))
    })?;

    let mut config = TelemetryConfig::default();
    config.exposition.bind_addr = bind_addr;
    if let Ok(namespace) = std::env::var(ENV_NAMESPACE) {
        config.namespace = namespace;
    }
    if let Ok(metrics_path) = std::env::var(ENV_METRICS_PATH) {
        config.exposition.metrics_path = metrics_path;
    }
    if let Ok(health_path) = std::env::var(ENV_HEALTH_PATH) {
        config.exposition.health_path = health_path;
    }
    Ok(config)
}

/// Load configuration from a TOML file
///
/// When `path` is `None`, probes the default locations in order.
///
/// # Errors
/// Returns `TelemetryError::Config` if no file is found or the file
/// fails to parse.
pub fn load_from_file(path: Option<&Path>) -> Result<TelemetryConfig> {
    let path = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => probe_config_path()
            .ok_or_else(|| TelemetryError::Config("no config file found".to_string()))?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|error| {
        TelemetryError::Config(format!("read {}: {error}", path.display()))
    })?;
    let config = toml::from_str(&contents).map_err(|error| {
        TelemetryError::Config(format!("parse {}: {error}", path.display()))
    })?;
    tracing::info!(path = %path.display(), "Telemetry configuration loaded from file");
    Ok(config)
}

fn probe_config_path() -> Option<PathBuf> {
    PROBE_PATHS.iter().copied().map(PathBuf::from).find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    //! Unit tests for the configuration loader.
    use std::io::Write;

    use super::*;

    /// Validates loading a full TOML file.
    ///
    /// Assertions:
    /// - Confirms every field is taken from the file.
    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"
            namespace = "pizzeria"

            [exposition]
            bind_addr = "0.0.0.0:9100"
            metrics_path = "/internal/metrics"
            health_path = "/internal/health"
            "#
        )
        .expect("write config");

        let config = load_from_file(Some(file.path())).expect("config should load");
        assert_eq!(config.namespace, "pizzeria");
        assert_eq!(config.exposition.bind_addr, "0.0.0.0:9100");
        assert_eq!(config.exposition.metrics_path, "/internal/metrics");
        assert_eq!(config.exposition.health_path, "/internal/health");
    }

    /// Validates parse failures surface as config errors.
    ///
    /// Assertions:
    /// - Confirms an invalid file yields `TelemetryError::Config`.
    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "namespace = [not valid").expect("write config");

        let error = load_from_file(Some(file.path())).expect_err("parse should fail");
        assert!(matches!(error, TelemetryError::Config(_)));
    }

    /// Validates a missing explicit file yields a config error.
    ///
    /// Assertions:
    /// - Confirms the error names the missing path.
    #[test]
    fn test_missing_file_is_config_error() {
        let error = load_from_file(Some(Path::new("/nonexistent/calcmetrics.toml")))
            .expect_err("missing file should fail");
        assert!(matches!(error, TelemetryError::Config(_)));
    }
}
