//! Conditional-recording policy
//!
//! Applies the domain recording rules to one completed business
//! calculation: count and duration are unconditional, error kind only on
//! failure, and quality/ingredient series only on success with the
//! zero-sentinel suppressed.

use std::sync::Arc;

use calcmetrics_domain::CalculationResult;

use crate::ports::CalculatorMetrics;
use crate::taxonomy::UNKNOWN_ERROR;

/// Records one [`CalculationResult`] against the domain sink.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    metrics: Arc<dyn CalculatorMetrics>,
}

impl MetricsRecorder {
    /// Create a recorder writing to the given domain sink.
    #[must_use]
    pub fn new(metrics: Arc<dyn CalculatorMetrics>) -> Self {
        Self { metrics }
    }

    /// Apply the conditional-recording policy to one result.
    ///
    /// Always counts the calculation and observes its duration. On
    /// failure, counts the (type, error kind) pair and stops: quality
    /// fields are meaningless on the failure path even when non-zero. On
    /// success, quality histograms receive only strictly positive values
    /// (zero is the "absent" sentinel) and every used ingredient is
    /// counted as valid.
    pub fn record(&self, result: &CalculationResult) {
        let calculation_type = result.calculation_type.label();

        self.metrics.increment_calculations_total(calculation_type);
        self.metrics.record_calculation_duration(calculation_type, result.duration);

        if !result.success {
            let error_kind = result.error_kind.unwrap_or(UNKNOWN_ERROR);
            self.metrics.increment_calculation_errors(calculation_type, error_kind);
            tracing::trace!(calculation_type, error_kind, "recorded failed calculation");
            return;
        }

        if result.weight > 0.0 {
            self.metrics.record_dough_weight(result.weight);
        }

        if result.hydration > 0.0 {
            self.metrics.record_dough_hydration(result.hydration);
        }

        if result.accuracy > 0.0 {
            self.metrics.record_dough_accuracy(result.accuracy);
        }

        if let Some(recipe_type) = result.recipe_type.as_deref() {
            if !recipe_type.is_empty() {
                self.metrics.increment_recipe_types(recipe_type);
            }
        }

        for ingredient in &result.ingredients_used {
            self.metrics.increment_ingredient_validations(ingredient, true);
        }

        tracing::trace!(
            calculation_type,
            duration_ms = result.duration.as_millis() as u64,
            "recorded successful calculation"
        );
    }
}
