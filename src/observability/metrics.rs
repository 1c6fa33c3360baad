//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_requests_total` (counter): inbound requests by method, route, status
//! - `api_request_duration_seconds` (histogram): inbound latency
//! - `upstream_requests_total` (counter): upstream calls by operation, outcome
//! - `upstream_request_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until
//!   `init_metrics` installs the Prometheus exporter
//! - Route label is the matched route template, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "api_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "api_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call.
pub fn record_upstream_call(operation: &'static str, outcome: &'static str, start: Instant) {
    counter!("upstream_requests_total", "operation" => operation, "outcome" => outcome).increment(1);
    histogram!("upstream_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every request against its matched route.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
