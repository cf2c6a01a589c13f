//! Error taxonomy mapping
//!
//! Maps call outcomes onto two independent label vocabularies: the
//! technical channel (protocol-shaped status labels) and the domain
//! channel (business-shaped error kinds). The two taxonomies are
//! deliberately not isomorphic: deadline expiry has its own domain
//! bucket (`timeout`) but folds into the technical catch-all.

use calcmetrics_domain::{StatusCode, StatusError};

/// Technical status label for a successful call.
pub const STATUS_SUCCESS: &str = "success";
/// Technical catch-all for unrecognized or unstructured errors.
pub const STATUS_ERROR: &str = "error";
/// Domain catch-all error kind.
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// Technical status label for a completed call outcome.
#[must_use]
pub fn outcome_status_label<T, E: StatusError>(outcome: &Result<T, E>) -> &'static str {
    match outcome {
        Ok(_) => STATUS_SUCCESS,
        Err(error) => status_label(error.status_code()),
    }
}

/// Technical status label for an error's structured code.
///
/// `None` (unstructured error) and every unmapped code collapse into the
/// `error` catch-all.
#[must_use]
pub fn status_label(code: Option<StatusCode>) -> &'static str {
    match code {
        Some(StatusCode::Ok) => STATUS_SUCCESS,
        Some(StatusCode::InvalidArgument) => "invalid_argument",
        Some(StatusCode::NotFound) => "not_found",
        Some(StatusCode::Internal) => "internal_error",
        Some(StatusCode::Unavailable) => "unavailable",
        _ => STATUS_ERROR,
    }
}

/// Domain error-kind label for a failed call.
///
/// Independent granularity from [`status_label`]: deadline expiry maps
/// uniquely to `timeout` here. Unstructured errors map to
/// [`UNKNOWN_ERROR`].
#[must_use]
pub fn error_kind(code: Option<StatusCode>) -> &'static str {
    match code {
        Some(StatusCode::InvalidArgument) => "invalid_input",
        Some(StatusCode::NotFound) => "recipe_not_found",
        Some(StatusCode::Internal) => "calculation_error",
        Some(StatusCode::Unavailable) => "service_unavailable",
        Some(StatusCode::DeadlineExceeded) => "timeout",
        _ => UNKNOWN_ERROR,
    }
}
