//! # Calcmetrics Infra
//!
//! Infrastructure adapters for calculator telemetry.
//!
//! This crate contains:
//! - The Prometheus backend implementing both sink ports
//! - The pull-based `/metrics` + `/health` exposition endpoint
//! - Configuration loading (environment first, TOML fallback)
//!
//! ## Architecture
//! - Implements the port traits defined in `calcmetrics-core`
//! - The core never depends on this crate; backends are swappable

pub mod config;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use http::exposition;
pub use observability::PrometheusMetrics;
