//! HTTP server.
//!
//! This module provides:
//! - REST API using axum, with `/api/v1/whoami` behind the `ApiKey` extractor
//! - Health and metrics endpoints
//! - Tracing setup

mod app;
pub mod metrics;
mod observability;
mod rest;

pub use app::{create_router, App};
pub use metrics::init_metrics;
pub use observability::{init_tracing, spans};
pub use rest::{create_rest_router, HealthResponse, WhoAmIResponse};
