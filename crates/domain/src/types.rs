//! Telemetry data types for calculator operations

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical business calculation categories.
///
/// Every business RPC maps to exactly one category; anything the
/// classifier cannot resolve maps to [`CalculationType::Unknown`] so
/// recording stays well-defined for arbitrary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// Dough weight/geometry calculation
    DoughCalculation,
    /// Ingredient breakdown calculation
    IngredientCalculation,
    /// Recipe optimization
    RecipeOptimization,
    /// Unrecognized or malformed method address
    Unknown,
}

impl CalculationType {
    /// Canonical snake_case label used on metric series.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DoughCalculation => "dough_calculation",
            Self::IngredientCalculation => "ingredient_calculation",
            Self::RecipeOptimization => "recipe_optimization",
            Self::Unknown => "unknown_calculation",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of one completed business calculation.
///
/// Constructed once per completed business call by the instrumentation
/// wrapper and consumed exactly once by the metrics recorder. For the
/// quality fields (`weight`, `hydration`, `accuracy`) the value `0.0` is
/// the "absent" sentinel, never a genuine zero measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Which business calculation completed
    pub calculation_type: CalculationType,
    /// Elapsed wall-clock time of the call
    pub duration: Duration,
    /// Whether the handler returned without error
    pub success: bool,
    /// Domain error-kind label; only meaningful when `success` is false
    pub error_kind: Option<&'static str>,
    /// Dough weight in grams (0.0 = absent)
    pub weight: f64,
    /// Hydration percentage (0.0 = absent)
    pub hydration: f64,
    /// Calculation accuracy percentage (0.0 = absent)
    pub accuracy: f64,
    /// Ingredient names the calculation used
    pub ingredients_used: Vec<String>,
    /// Recipe type, when the response carried one
    pub recipe_type: Option<String>,
}

impl CalculationResult {
    /// Create a result snapshot with all quality fields absent.
    #[must_use]
    pub const fn new(
        calculation_type: CalculationType,
        duration: Duration,
        success: bool,
    ) -> Self {
        Self {
            calculation_type,
            duration,
            success,
            error_kind: None,
            weight: 0.0,
            hydration: 0.0,
            accuracy: 0.0,
            ingredients_used: Vec::new(),
            recipe_type: None,
        }
    }
}

/// Business metrics extracted from an RPC response.
///
/// Produced by a pluggable response extractor; zero/empty fields mean
/// "not provided" and are skipped during recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessObservation {
    /// Dough weight in grams (0.0 = absent)
    pub weight: f64,
    /// Hydration percentage (0.0 = absent)
    pub hydration: f64,
    /// Accuracy percentage (0.0 = absent)
    pub accuracy: f64,
    /// Ingredient names used by the calculation
    pub ingredients: Vec<String>,
    /// Recipe type label, when present
    pub recipe_type: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Unit tests for domain telemetry types.
    use super::*;

    /// Validates the calculation-type label table.
    ///
    /// Assertions:
    /// - Confirms each variant maps to its canonical snake_case label.
    #[test]
    fn test_calculation_type_labels() {
        assert_eq!(CalculationType::DoughCalculation.label(), "dough_calculation");
        assert_eq!(CalculationType::IngredientCalculation.label(), "ingredient_calculation");
        assert_eq!(CalculationType::RecipeOptimization.label(), "recipe_optimization");
        assert_eq!(CalculationType::Unknown.label(), "unknown_calculation");
    }

    /// Validates `CalculationResult::new` starts with all sentinels.
    ///
    /// Assertions:
    /// - Confirms quality fields default to the 0.0 absent sentinel.
    /// - Confirms ingredient list and recipe type start empty.
    #[test]
    fn test_calculation_result_new_has_absent_sentinels() {
        let result = CalculationResult::new(
            CalculationType::DoughCalculation,
            Duration::from_millis(100),
            true,
        );

        assert!(result.success);
        assert_eq!(result.weight, 0.0);
        assert_eq!(result.hydration, 0.0);
        assert_eq!(result.accuracy, 0.0);
        assert!(result.ingredients_used.is_empty());
        assert!(result.recipe_type.is_none());
        assert!(result.error_kind.is_none());
    }

    /// Validates serde round-trip for `BusinessObservation` defaults.
    ///
    /// Assertions:
    /// - Confirms an empty JSON object deserializes to the default value.
    #[test]
    fn test_business_observation_default_from_empty_json() {
        let observation: BusinessObservation =
            serde_json::from_str("{}").expect("empty object should deserialize");
        assert_eq!(observation, BusinessObservation::default());
    }
}
