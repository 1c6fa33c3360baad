//! Request identification and tracing.
//!
//! # Responsibilities
//! - Assign an `x-request-id` to every inbound request (UUID v4) unless the
//!   caller already sent one
//! - Echo the id back on the response
//! - Open a tracing span per request carrying method, path and id
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line of the
//!   request carries it

use axum::{body::Body, http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Read the request id set by `SetRequestIdLayer`.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

/// Wrap `router` with request id assignment, tracing, and id propagation.
///
/// Layers added later run first, so the id is set before the trace span
/// is created.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
