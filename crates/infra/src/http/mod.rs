//! HTTP surface for the telemetry subsystem

pub mod exposition;

// Re-export commonly used items
pub use exposition::{render, router, serve};
