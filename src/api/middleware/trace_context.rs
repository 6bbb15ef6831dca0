//! Continues a distributed trace started by the calling instance

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::infrastructure::observability::extract_trace_context;

/// Parent the current request span on any inbound `traceparent` header.
///
/// Must run inside `TraceLayer` so a request span exists.
pub async fn trace_context_middleware(request: Request<Body>, next: Next) -> Response {
    let parent = extract_trace_context(request.headers());
    tracing::Span::current().set_parent(parent);

    next.run(request).await
}
