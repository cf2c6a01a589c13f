//! Metrics backend adapters
//!
//! Concrete implementations of the core's sink capability ports.

pub mod prometheus;

// Re-export metric types for convenience
pub use prometheus::PrometheusMetrics;
