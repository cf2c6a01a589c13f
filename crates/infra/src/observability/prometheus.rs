//! Prometheus sink adapter
//!
//! Implements both capability ports against a caller-supplied
//! [`Registry`]. Series are registered up front; recording is
//! infallible after construction, so a scrape or storage problem in the
//! backend can never reach the instrumented RPC.

use std::time::Duration;

use calcmetrics_core::{CalculatorMetrics, RpcMetrics};
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
};

/// Prometheus implementation of the domain and technical sinks.
#[derive(Debug, Clone)]
pub struct PrometheusMetrics {
    // Business operations
    calculations_total: CounterVec,
    calculation_duration: HistogramVec,
    active_calculations: Gauge,
    calculation_errors: CounterVec,

    // Quality metrics
    dough_accuracy: Histogram,
    ingredient_validations: CounterVec,

    // Domain-specific metrics
    dough_weight: Histogram,
    dough_hydration: Histogram,
    recipe_types: CounterVec,

    // Technical metrics
    rpc_requests_total: CounterVec,
    rpc_request_duration: HistogramVec,
}

impl PrometheusMetrics {
    /// Create the full metric family set and register it with `registry`
    /// under the given namespace.
    ///
    /// # Errors
    /// Returns `prometheus::Error` when a family is invalid or already
    /// registered.
    pub fn new(registry: &Registry, namespace: &str) -> Result<Self, prometheus::Error> {
        let calculations_total = CounterVec::new(
            Opts::new("calculations_total", "Total number of calculations performed")
                .namespace(namespace),
            &["type"],
        )?;
        registry.register(Box::new(calculations_total.clone()))?;

        let calculation_duration = HistogramVec::new(
            HistogramOpts::new("calculation_duration_seconds", "Duration of calculations in seconds")
                .namespace(namespace)
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["type"],
        )?;
        registry.register(Box::new(calculation_duration.clone()))?;

        let active_calculations = Gauge::with_opts(
            Opts::new("active_calculations", "Number of calculations currently in progress")
                .namespace(namespace),
        )?;
        registry.register(Box::new(active_calculations.clone()))?;

        let calculation_errors = CounterVec::new(
            Opts::new("calculation_errors_total", "Total number of calculation errors")
                .namespace(namespace),
            &["type", "error_type"],
        )?;
        registry.register(Box::new(calculation_errors.clone()))?;

        let dough_accuracy = Histogram::with_opts(
            HistogramOpts::new(
                "dough_accuracy_percentage",
                "Accuracy of dough calculations as percentage",
            )
            .namespace(namespace)
            .buckets(vec![70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 97.0, 99.0, 99.5, 100.0]),
        )?;
        registry.register(Box::new(dough_accuracy.clone()))?;

        let ingredient_validations = CounterVec::new(
            Opts::new("ingredient_validations_total", "Total number of ingredient validations")
                .namespace(namespace),
            &["ingredient", "valid"],
        )?;
        registry.register(Box::new(ingredient_validations.clone()))?;

        let dough_weight = Histogram::with_opts(
            HistogramOpts::new("dough_weight_grams", "Weight of calculated dough in grams")
                .namespace(namespace)
                .buckets(vec![
                    100.0, 250.0, 500.0, 750.0, 1000.0, 1500.0, 2000.0, 3000.0, 5000.0, 10000.0,
                ]),
        )?;
        registry.register(Box::new(dough_weight.clone()))?;

        let dough_hydration = Histogram::with_opts(
            HistogramOpts::new(
                "dough_hydration_percentage",
                "Hydration percentage of calculated dough",
            )
            .namespace(namespace)
            .buckets(vec![50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0]),
        )?;
        registry.register(Box::new(dough_hydration.clone()))?;

        let recipe_types = CounterVec::new(
            Opts::new("recipe_types_total", "Total number of calculations by recipe type")
                .namespace(namespace),
            &["recipe_type"],
        )?;
        registry.register(Box::new(recipe_types.clone()))?;

        let rpc_requests_total = CounterVec::new(
            Opts::new("grpc_requests_total", "Total number of gRPC requests").namespace(namespace),
            &["method", "status"],
        )?;
        registry.register(Box::new(rpc_requests_total.clone()))?;

        let rpc_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "grpc_request_duration_seconds",
                "Duration of gRPC requests in seconds",
            )
            .namespace(namespace),
            &["method"],
        )?;
        registry.register(Box::new(rpc_request_duration.clone()))?;

        Ok(Self {
            calculations_total,
            calculation_duration,
            active_calculations,
            calculation_errors,
            dough_accuracy,
            ingredient_validations,
            dough_weight,
            dough_hydration,
            recipe_types,
            rpc_requests_total,
            rpc_request_duration,
        })
    }

    fn total_counter(&self, calculation_type: &str) -> Counter {
        self.calculations_total.with_label_values(&[calculation_type])
    }
}

impl CalculatorMetrics for PrometheusMetrics {
    fn increment_calculations_total(&self, calculation_type: &str) {
        self.total_counter(calculation_type).inc();
    }

    fn record_calculation_duration(&self, calculation_type: &str, duration: Duration) {
        self.calculation_duration
            .with_label_values(&[calculation_type])
            .observe(duration.as_secs_f64());
    }

    fn set_active_calculations(&self, count: u64) {
        self.active_calculations.set(count as f64);
    }

    fn increment_calculation_errors(&self, calculation_type: &str, error_kind: &str) {
        self.calculation_errors.with_label_values(&[calculation_type, error_kind]).inc();
    }

    fn record_dough_accuracy(&self, accuracy_pct: f64) {
        self.dough_accuracy.observe(accuracy_pct);
    }

    fn increment_ingredient_validations(&self, ingredient: &str, valid: bool) {
        let valid_label = if valid { "true" } else { "false" };
        self.ingredient_validations.with_label_values(&[ingredient, valid_label]).inc();
    }

    fn record_dough_weight(&self, weight_grams: f64) {
        self.dough_weight.observe(weight_grams);
    }

    fn record_dough_hydration(&self, hydration_pct: f64) {
        self.dough_hydration.observe(hydration_pct);
    }

    fn increment_recipe_types(&self, recipe_type: &str) {
        self.recipe_types.with_label_values(&[recipe_type]).inc();
    }
}

impl RpcMetrics for PrometheusMetrics {
    fn increment_rpc_requests(&self, method: &str, status: &str) {
        self.rpc_requests_total.with_label_values(&[method, status]).inc();
    }

    fn record_rpc_duration(&self, method: &str, duration: Duration) {
        self.rpc_request_duration.with_label_values(&[method]).observe(duration.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the Prometheus adapter.
    use prometheus::{Encoder, TextEncoder};

    use super::*;

    fn encode(registry: &Registry) -> String {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&registry.gather(), &mut buffer).expect("encode registry");
        String::from_utf8(buffer).expect("exposition output is utf-8")
    }

    fn adapter() -> (Registry, PrometheusMetrics) {
        let registry = Registry::new();
        let metrics =
            PrometheusMetrics::new(&registry, "calculator").expect("register metric families");
        (registry, metrics)
    }

    /// Validates the full family set registers under the namespace.
    ///
    /// Assertions:
    /// - Confirms each expected family name appears in the exposition
    ///   output once something has been recorded.
    #[test]
    fn test_family_registration() {
        let (registry, metrics) = adapter();

        metrics.increment_calculations_total("dough_calculation");
        metrics.record_calculation_duration("dough_calculation", Duration::from_millis(10));
        metrics.set_active_calculations(2);
        metrics.increment_calculation_errors("dough_calculation", "invalid_input");
        metrics.record_dough_accuracy(95.0);
        metrics.increment_ingredient_validations("flour", true);
        metrics.record_dough_weight(500.0);
        metrics.record_dough_hydration(65.0);
        metrics.increment_recipe_types("neapolitan");
        metrics.increment_rpc_requests("CalculateDough", "success");
        metrics.record_rpc_duration("CalculateDough", Duration::from_millis(10));

        let output = encode(&registry);
        for family in [
            "calculator_calculations_total",
            "calculator_calculation_duration_seconds",
            "calculator_active_calculations",
            "calculator_calculation_errors_total",
            "calculator_dough_accuracy_percentage",
            "calculator_ingredient_validations_total",
            "calculator_dough_weight_grams",
            "calculator_dough_hydration_percentage",
            "calculator_recipe_types_total",
            "calculator_grpc_requests_total",
            "calculator_grpc_request_duration_seconds",
        ] {
            assert!(output.contains(family), "missing family {family}");
        }
    }

    /// Validates counter and gauge values reach the registry.
    ///
    /// Assertions:
    /// - Confirms repeated increments accumulate on one series.
    /// - Confirms the gauge holds the last published value.
    /// - Confirms label values are carried through.
    #[test]
    fn test_recorded_values() {
        let (registry, metrics) = adapter();

        metrics.increment_calculations_total("dough_calculation");
        metrics.increment_calculations_total("dough_calculation");
        metrics.set_active_calculations(3);
        metrics.increment_ingredient_validations("flour", true);

        let output = encode(&registry);
        assert!(output.contains(r#"calculator_calculations_total{type="dough_calculation"} 2"#));
        assert!(output.contains("calculator_active_calculations 3"));
        assert!(output.contains(r#"ingredient="flour""#));
        assert!(output.contains(r#"valid="true""#));
    }

    /// Validates registering twice against one registry fails cleanly.
    ///
    /// Assertions:
    /// - Confirms the second registration returns an error instead of
    ///   panicking.
    #[test]
    fn test_duplicate_registration_is_an_error() {
        let registry = Registry::new();
        let first = PrometheusMetrics::new(&registry, "calculator");
        assert!(first.is_ok());
        let second = PrometheusMetrics::new(&registry, "calculator");
        assert!(second.is_err());
    }
}
