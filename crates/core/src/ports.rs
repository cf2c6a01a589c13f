//! Metric sink ports
//!
//! Two independently satisfiable capability traits a concrete metrics
//! backend may implement: the domain channel (calculation-shaped series)
//! and the technical channel (RPC-shaped series). The interceptor and
//! recorder hold references only to these traits, never to a concrete
//! backend, so an in-memory collector can stand in during tests.
//!
//! Sink writes are infallible at the call site: recording is best-effort
//! by contract and must never affect the instrumented RPC.

use std::fmt::Debug;
use std::time::Duration;

/// Domain-channel sink for calculation telemetry.
pub trait CalculatorMetrics: Send + Sync + Debug {
    /// Count one completed calculation of the given type.
    fn increment_calculations_total(&self, calculation_type: &str);

    /// Observe the elapsed duration of a calculation of the given type.
    fn record_calculation_duration(&self, calculation_type: &str, duration: Duration);

    /// Publish the current number of in-flight calculations.
    fn set_active_calculations(&self, count: u64);

    /// Count one failed calculation, keyed by type and error kind.
    fn increment_calculation_errors(&self, calculation_type: &str, error_kind: &str);

    /// Observe the accuracy percentage of a successful calculation.
    fn record_dough_accuracy(&self, accuracy_pct: f64);

    /// Count one ingredient validation outcome.
    fn increment_ingredient_validations(&self, ingredient: &str, valid: bool);

    /// Observe the calculated dough weight in grams.
    fn record_dough_weight(&self, weight_grams: f64);

    /// Observe the calculated hydration percentage.
    fn record_dough_hydration(&self, hydration_pct: f64);

    /// Count one calculation for the given recipe type.
    fn increment_recipe_types(&self, recipe_type: &str);
}

/// Technical-channel sink for RPC telemetry.
pub trait RpcMetrics: Send + Sync + Debug {
    /// Count one completed RPC, keyed by method name and status label.
    fn increment_rpc_requests(&self, method: &str, status: &str);

    /// Observe the elapsed duration of one RPC.
    fn record_rpc_duration(&self, method: &str, duration: Duration);
}

/// No-op domain sink for tests or disabled telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCalculatorMetrics;

impl CalculatorMetrics for NoOpCalculatorMetrics {
    fn increment_calculations_total(&self, _calculation_type: &str) {
        // No-op
    }

    fn record_calculation_duration(&self, _calculation_type: &str, _duration: Duration) {
        // No-op
    }

    fn set_active_calculations(&self, _count: u64) {
        // No-op
    }

    fn increment_calculation_errors(&self, _calculation_type: &str, _error_kind: &str) {
        // No-op
    }

    fn record_dough_accuracy(&self, _accuracy_pct: f64) {
        // No-op
    }

    fn increment_ingredient_validations(&self, _ingredient: &str, _valid: bool) {
        // No-op
    }

    fn record_dough_weight(&self, _weight_grams: f64) {
        // No-op
    }

    fn record_dough_hydration(&self, _hydration_pct: f64) {
        // No-op
    }

    fn increment_recipe_types(&self, _recipe_type: &str) {
        // No-op
    }
}

/// No-op technical sink for tests or disabled telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRpcMetrics;

impl RpcMetrics for NoOpRpcMetrics {
    fn increment_rpc_requests(&self, _method: &str, _status: &str) {
        // No-op
    }

    fn record_rpc_duration(&self, _method: &str, _duration: Duration) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the sink ports.
    use super::*;

    /// Validates the no-op sinks satisfy both capability traits.
    ///
    /// Assertion coverage: ensures every sink operation completes without
    /// panicking.
    #[test]
    fn test_noop_sinks() {
        let domain = NoOpCalculatorMetrics;
        domain.increment_calculations_total("dough_calculation");
        domain.record_calculation_duration("dough_calculation", Duration::from_millis(5));
        domain.set_active_calculations(3);
        domain.increment_calculation_errors("dough_calculation", "invalid_input");
        domain.record_dough_accuracy(99.5);
        domain.increment_ingredient_validations("flour", true);
        domain.record_dough_weight(500.0);
        domain.record_dough_hydration(65.0);
        domain.increment_recipe_types("neapolitan");

        let rpc = NoOpRpcMetrics;
        rpc.increment_rpc_requests("CalculateDough", "success");
        rpc.record_rpc_duration("CalculateDough", Duration::from_millis(5));
    }
}
