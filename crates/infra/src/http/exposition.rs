//! Pull-based metrics exposition endpoint
//!
//! Serves the registry in the text exposition format for an external
//! scraper, plus a static liveness payload. The instrumentation core
//! feeds the registry but never touches this endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use calcmetrics_domain::{ExpositionConfig, Result, TelemetryError};
use prometheus::{Encoder, Registry, TextEncoder};

/// Render the registry in the text exposition format.
///
/// # Errors
/// Returns [`TelemetryError::Exposition`] when encoding fails.
pub fn render(registry: &Registry) -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buffer)
        .map_err(|error| TelemetryError::Exposition(error.to_string()))?;
    String::from_utf8(buffer).map_err(|error| TelemetryError::Exposition(error.to_string()))
}

/// Build the exposition router for the configured routes.
#[must_use]
pub fn router(config: &ExpositionConfig, registry: Arc<Registry>) -> Router {
    Router::new()
        .route(&config.metrics_path, get(metrics_handler))
        .route(&config.health_path, get(health_handler))
        .with_state(registry)
}

/// Bind the configured address and serve the exposition router.
///
/// # Errors
/// Returns [`TelemetryError::Exposition`] when binding or serving fails.
pub async fn serve(config: &ExpositionConfig, registry: Arc<Registry>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|error| TelemetryError::Exposition(format!("bind {}: {error}", config.bind_addr)))?;
    tracing::info!(
        addr = %config.bind_addr,
        metrics_path = %config.metrics_path,
        "metrics exposition listening"
    );
    axum::serve(listener, router(config, registry))
        .await
        .map_err(|error| TelemetryError::Exposition(error.to_string()))
}

async fn metrics_handler(State(registry): State<Arc<Registry>>) -> Response {
    match render(&registry) {
        Ok(body) => {
            ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response()
        }
        Err(error) => {
            tracing::warn!(%error, "failed to encode metrics for scrape");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy", "service": "calculator" }))
}
