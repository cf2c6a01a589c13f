//! # Calcmetrics Domain
//!
//! Business domain types for calculator telemetry.
//!
//! This crate contains:
//! - Calculation telemetry types (`CalculationType`, `CalculationResult`)
//! - RPC status vocabulary (`StatusCode`, `StatusError`, `RpcError`)
//! - Telemetry error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other calcmetrics crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod status;
pub mod types;

// Re-export commonly used items
pub use config::{ExpositionConfig, TelemetryConfig};
pub use errors::{Result, TelemetryError};
pub use status::{RpcError, StatusCode, StatusError};
pub use types::{BusinessObservation, CalculationResult, CalculationType};
