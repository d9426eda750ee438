//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigations by outcome
//! - `shell_component_load_seconds` (histogram): lazy load latency by route
//! - `shell_http_requests_total` (counter): API requests by method, status

use std::time::Instant;

/// Record the outcome of one navigation (`committed` or an error kind).
pub fn record_navigation(outcome: &'static str) {
    metrics::counter!("shell_navigations_total", "outcome" => outcome).increment(1);
}

/// Record how long a lazy component took to load.
pub fn record_component_load(route: &str, start: Instant) {
    metrics::histogram!("shell_component_load_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record one API request. `status` is 0 when no response was received.
pub fn record_http_request(method: &str, status: u16) {
    metrics::counter!(
        "shell_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
