//! Response-to-metrics extraction
//!
//! Pluggable extraction of business observations from RPC responses,
//! keyed by calculation type. The registry ships empty: concrete
//! response types are not wired up yet, so by default a successful call
//! records only its count and duration. Services register an extractor
//! per calculation type once their response types are available.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use calcmetrics_domain::{BusinessObservation, CalculationType};

/// Extracts business metrics from an opaque RPC response.
///
/// Returning `None` means the response carried nothing observable; the
/// recorder then sees a result with all quality fields absent.
pub trait ResponseExtractor: Send + Sync {
    /// Extract an observation from a response value.
    fn extract(&self, response: &dyn Any) -> Option<BusinessObservation>;
}

impl<F> ResponseExtractor for F
where
    F: Fn(&dyn Any) -> Option<BusinessObservation> + Send + Sync,
{
    fn extract(&self, response: &dyn Any) -> Option<BusinessObservation> {
        self(response)
    }
}

/// Registry of response extractors, keyed by calculation type.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<CalculationType, Arc<dyn ResponseExtractor>>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the extractor for a calculation type, replacing any
    /// previous one.
    pub fn register(
        &mut self,
        calculation_type: CalculationType,
        extractor: Arc<dyn ResponseExtractor>,
    ) {
        self.extractors.insert(calculation_type, extractor);
    }

    /// Run the extractor registered for `calculation_type`, if any.
    #[must_use]
    pub fn extract(
        &self,
        calculation_type: CalculationType,
        response: &dyn Any,
    ) -> Option<BusinessObservation> {
        self.extractors.get(&calculation_type)?.extract(response)
    }

    /// Whether no extractors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("registered", &self.extractors.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the extractor registry.
    use super::*;

    struct DoughResponse {
        weight: f64,
        hydration: f64,
    }

    /// Validates the default registry extracts nothing.
    ///
    /// Assertions:
    /// - Confirms the registry starts empty.
    /// - Confirms extraction returns `None` for any type.
    #[test]
    fn test_empty_registry() {
        let registry = ExtractorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.extract(CalculationType::DoughCalculation, &42_u32).is_none());
    }

    /// Validates a registered closure extractor runs for its type only.
    ///
    /// Assertions:
    /// - Confirms extraction succeeds for the registered type with a
    ///   matching response.
    /// - Confirms other types and mismatched responses yield `None`.
    #[test]
    fn test_registered_extractor() {
        let mut registry = ExtractorRegistry::new();
        registry.register(
            CalculationType::DoughCalculation,
            Arc::new(|response: &dyn Any| {
                let dough = response.downcast_ref::<DoughResponse>()?;
                Some(BusinessObservation {
                    weight: dough.weight,
                    hydration: dough.hydration,
                    ..BusinessObservation::default()
                })
            }),
        );

        let response = DoughResponse { weight: 500.0, hydration: 65.0 };
        let observation = registry
            .extract(CalculationType::DoughCalculation, &response)
            .expect("extractor should match DoughResponse");
        assert_eq!(observation.weight, 500.0);
        assert_eq!(observation.hydration, 65.0);

        assert!(registry.extract(CalculationType::RecipeOptimization, &response).is_none());
        assert!(registry.extract(CalculationType::DoughCalculation, &7_u8).is_none());
    }
}
