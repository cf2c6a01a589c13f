//! RPC status vocabulary
//!
//! Mirrors the closed set of structured status codes the calculator's
//! RPC surface uses. Handler error types expose their code through
//! [`StatusError`]; an error without a structured code (`None`) is
//! treated as unstructured by the taxonomy mapper.

use thiserror::Error;

/// Structured RPC status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StatusCode {
    /// Call completed successfully
    Ok,
    /// Client supplied an invalid argument
    InvalidArgument,
    /// Requested entity was not found
    NotFound,
    /// Internal server error
    Internal,
    /// Service is currently unavailable
    Unavailable,
    /// Deadline expired before the call completed
    DeadlineExceeded,
    /// Unknown error
    Unknown,
}

/// Access to the structured status code carried by a handler error.
///
/// Returning `None` marks the error as unstructured; the taxonomy mapper
/// then falls back to its catch-all labels.
pub trait StatusError {
    /// The structured status code, if the error carries one.
    fn status_code(&self) -> Option<StatusCode>;
}

/// Error type for calculator RPC handlers.
///
/// Carries the structured status vocabulary so instrumented handlers can
/// fail with a code the taxonomy mapper understands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Client supplied an invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested recipe or entity was not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Calculation failed internally
    #[error("internal error: {0}")]
    Internal(String),

    /// Service is currently unavailable
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Deadline expired before the calculation completed
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Unclassified failure
    #[error("{0}")]
    Unknown(String),
}

impl StatusError for RpcError {
    fn status_code(&self) -> Option<StatusCode> {
        let code = match self {
            Self::InvalidArgument(_) => StatusCode::InvalidArgument,
            Self::NotFound(_) => StatusCode::NotFound,
            Self::Internal(_) => StatusCode::Internal,
            Self::Unavailable(_) => StatusCode::Unavailable,
            Self::DeadlineExceeded(_) => StatusCode::DeadlineExceeded,
            Self::Unknown(_) => StatusCode::Unknown,
        };
        Some(code)
    }
}
