//! Method classification
//!
//! Parses full RPC method addresses (`/<package>.<Service>/<Method>`) and
//! decides whether a call is business-significant. Classification is a
//! pure function of the address string: it is total over arbitrary input
//! and degrades to the `unknown` sentinel instead of failing.

use calcmetrics_domain::CalculationType;

/// Full address of the dough calculation RPC.
pub const CALCULATE_DOUGH: &str = "/calculator.CalculatorService/CalculateDough";
/// Full address of the ingredient calculation RPC.
pub const CALCULATE_INGREDIENTS: &str = "/calculator.CalculatorService/CalculateIngredients";
/// Full address of the recipe optimization RPC.
pub const OPTIMIZE_RECIPE: &str = "/calculator.CalculatorService/OptimizeRecipe";

/// Sentinel method name for unparseable addresses.
pub const UNKNOWN_METHOD: &str = "unknown";

/// Closed set of business-significant RPC addresses.
///
/// Membership is an exact full-address match; a same-named method on a
/// different service is not business.
const BUSINESS_METHODS: [&str; 3] = [CALCULATE_DOUGH, CALCULATE_INGREDIENTS, OPTIMIZE_RECIPE];

/// Parsed identity of one inbound RPC.
///
/// Derived per call, never persisted. Borrows from the address string so
/// the hot path stays allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor<'a> {
    full_method: &'a str,
    service: &'a str,
    method: &'a str,
    business: bool,
    calculation_type: CalculationType,
}

impl<'a> MethodDescriptor<'a> {
    /// Parse a full method address.
    ///
    /// Never fails: malformed addresses (missing leading slash, no method
    /// segment, service path without at least `package.Service`) yield a
    /// descriptor with the [`UNKNOWN_METHOD`] sentinel, an empty service
    /// name, and the `Unknown` calculation type.
    #[must_use]
    pub fn parse(full_method: &'a str) -> Self {
        let (service, method) = split_address(full_method).unwrap_or(("", UNKNOWN_METHOD));
        let business = BUSINESS_METHODS.contains(&full_method);
        Self {
            full_method,
            service,
            method,
            business,
            calculation_type: calculation_type_for(full_method),
        }
    }

    /// The raw address this descriptor was parsed from.
    #[must_use]
    pub const fn full_method(&self) -> &'a str {
        self.full_method
    }

    /// Dot-qualified service path (`calculator.CalculatorService`).
    ///
    /// Empty for unparseable addresses.
    #[must_use]
    pub const fn service_name(&self) -> &'a str {
        self.service
    }

    /// Bare method name (`CalculateDough`), or the `unknown` sentinel.
    #[must_use]
    pub const fn method_name(&self) -> &'a str {
        self.method
    }

    /// Whether the address is in the closed business set.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        self.business
    }

    /// Canonical calculation category for this address.
    #[must_use]
    pub const fn calculation_type(&self) -> CalculationType {
        self.calculation_type
    }
}

/// Map a full method address to its calculation category.
///
/// Exact-match table; every unmapped address (including malformed ones)
/// maps to `Unknown` so metrics recording is always well-defined.
#[must_use]
pub fn calculation_type_for(full_method: &str) -> CalculationType {
    match full_method {
        CALCULATE_DOUGH => CalculationType::DoughCalculation,
        CALCULATE_INGREDIENTS => CalculationType::IngredientCalculation,
        OPTIMIZE_RECIPE => CalculationType::RecipeOptimization,
        _ => CalculationType::Unknown,
    }
}

/// Split `/<package>.<Service>/<Method>` into service path and method.
///
/// Requires a leading slash, a final slash separating the method segment,
/// and at least two non-empty dot segments in the service path.
fn split_address(full_method: &str) -> Option<(&str, &str)> {
    let rest = full_method.strip_prefix('/')?;
    let (service_path, method) = rest.rsplit_once('/')?;
    let qualified_segments = service_path.split('.').filter(|segment| !segment.is_empty()).count();
    if qualified_segments < 2 {
        return None;
    }
    Some((service_path, method))
}
