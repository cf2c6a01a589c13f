//! # Calcmetrics Core
//!
//! Pure instrumentation logic - no backend dependencies.
//!
//! This crate contains:
//! - Method classification and error taxonomy mapping
//! - Port interfaces (traits) for the metric sinks
//! - The instrumentation wrapper and conditional-recording policy
//!
//! ## Architecture Principles
//! - Only depends on `calcmetrics-domain`
//! - No metrics backend, HTTP, or transport code
//! - All external dependencies via traits
//! - Pure, testable instrumentation logic

pub mod classify;
pub mod extract;
pub mod inflight;
pub mod interceptor;
pub mod ports;
pub mod recorder;
pub mod taxonomy;

// Re-export specific items to avoid ambiguity
pub use classify::MethodDescriptor;
pub use extract::{ExtractorRegistry, ResponseExtractor};
pub use inflight::InFlightCounter;
pub use interceptor::MetricsInterceptor;
pub use ports::{CalculatorMetrics, NoOpCalculatorMetrics, NoOpRpcMetrics, RpcMetrics};
pub use recorder::MetricsRecorder;
