//! Prometheus metrics definitions.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

/// API key extraction attempts, by outcome (accepted, missing, malformed).
pub static AUTH_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "keygate_auth_attempts_total",
        "Total number of API key extraction attempts",
        &["outcome"]
    )
    .expect("Failed to register keygate_auth_attempts_total metric")
});

/// Request counter.
pub static REQUEST_COUNT: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "keygate_requests_total",
        "Total number of requests",
        &["status"]
    )
    .expect("Failed to register keygate_requests_total metric")
});

/// Initialize all metrics (call once at startup).
pub fn init_metrics() {
    // Access lazy statics to register them
    let _ = &*AUTH_ATTEMPTS;
    let _ = &*REQUEST_COUNT;

    tracing::debug!("Prometheus metrics initialized");
}
