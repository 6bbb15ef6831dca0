//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use super::route_path;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log every request and its outcome, tagging both with a request id.
///
/// Does not open a span of its own; `TraceLayer` owns the request span.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = route_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = loggable_headers(&request);

    info!(
        method = %method,
        path = %path,
        uri = %uri,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn loggable_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| format!("{}={}", name, value.to_str().unwrap_or("[invalid]")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "traceparent"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_log_header() {
        assert!(should_log_header("user-agent"));
        assert!(should_log_header("traceparent"));
        assert!(!should_log_header("authorization"));
        assert!(!should_log_header("cookie"));
    }

    #[test]
    fn test_request_id_is_taken_from_header() {
        let request = Request::builder()
            .uri("/chain")
            .header(REQUEST_ID_HEADER, "req-42")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_request_id(&request), "req-42");
    }

    #[test]
    fn test_request_id_is_generated_when_missing() {
        let request = Request::builder().uri("/chain").body(Body::empty()).unwrap();
        let id = extract_request_id(&request);

        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_loggable_headers_skip_unlisted() {
        let request = Request::builder()
            .uri("/chain")
            .header("user-agent", "curl/8")
            .header("authorization", "Bearer secret")
            .body(Body::empty())
            .unwrap();

        let logged = loggable_headers(&request);
        assert_eq!(logged, "user-agent=curl/8");
    }
}
