//! REST API endpoints.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;

use crate::auth::{ApiKey, API_KEY_SCHEME};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Identity of the presented key, without the key itself.
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub scheme: &'static str,
    pub key_fingerprint: String,
}

/// Create REST API router.
pub fn create_rest_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/v1/whoami", get(whoami))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Prometheus metrics endpoint.
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            tracing::trace!("Metrics encoded successfully");
            (
                StatusCode::OK,
                [(
                    axum::http::header::CONTENT_TYPE,
                    "text/plain; charset=utf-8",
                )],
                buffer,
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    axum::http::header::CONTENT_TYPE,
                    "text/plain; charset=utf-8",
                )],
                b"Failed to encode metrics".to_vec(),
            )
        }
    }
}

/// Echo a fingerprint of the presented key.
async fn whoami(key: ApiKey) -> Json<WhoAmIResponse> {
    let key_fingerprint = key.fingerprint();
    tracing::debug!(fingerprint = %key_fingerprint, "whoami");

    Json(WhoAmIResponse {
        scheme: API_KEY_SCHEME,
        key_fingerprint,
    })
}
