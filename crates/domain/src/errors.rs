//! Error types used throughout the telemetry subsystem

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for calcmetrics
///
/// Instrumentation itself never fails an RPC; these errors only surface
/// from setup paths (registry wiring, exposition endpoint, config).
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TelemetryError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metric registration against the backend registry failed
    #[error("Registry error: {0}")]
    Registry(String),

    /// Exposition endpoint failed to bind or serve
    #[error("Exposition error: {0}")]
    Exposition(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for calcmetrics operations
pub type Result<T> = std::result::Result<T, TelemetryError>;
