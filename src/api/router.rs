use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::fallback;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, trace_context_middleware};
use super::simulate;
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Multi-instance chain
        .route("/chain", get(simulate::chain::chain))
        // Single-hop simulators
        .route("/delay", get(simulate::delay::delay))
        .route("/error", get(simulate::fault::error))
        .route("/status", get(simulate::status::status))
        .route("/crud", post(simulate::crud::crud))
        .fallback(fallback::not_found)
        .with_state(state)
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(CatchPanicLayer::custom(fallback::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Full router plus the Prometheus endpoint when metrics are enabled
pub fn create_router_with_metrics(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = create_router(state);

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let mut config = AppConfig::default();
        config.instance.id = 4;
        config.instance.name = "instance-4".to_string();

        create_router(crate::create_app_state_with_config(&config).unwrap())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health_reports_identity() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "up");
        assert_eq!(body["instance"], 4);
        assert_eq!(body["name"], "instance-4");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get("/missing/thing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Route GET /missing/thing not found");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_single_slot_chain_is_terminal() {
        let (status, body) = get("/chain?seq=4&traceId=trace-test").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["instance"], 4);
        assert_eq!(body["traceId"], "trace-test");
        assert_eq!(body["chainPosition"], 0);
        assert_eq!(body["finalResult"]["status"], "completed");
        assert_eq!(body["childResponses"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_error_simulator() {
        let (status, body) = get("/error?type=handled").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Handled error");

        let (status, body) = get("/error?type=fatal").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Fatal error occurred");

        let (status, body) = get("/error").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No error triggered");
    }

    #[tokio::test]
    async fn test_status_simulator_echoes_code() {
        let (status, body) = get("/status?code=503").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], 503);
        assert_eq!(body["error"], "Server error 503");

        let (status, _) = get("/status?code=42").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_crud_runs_requested_operations() {
        let (status, body) = post_json("/crud", r#"{"operation":"cr"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operations"][0]["type"], "create");
        assert_eq!(body["operations"][0]["lastId"], 1);
        assert_eq!(body["operations"][1]["type"], "read");
        assert_eq!(body["operations"][1]["count"], 1);
        assert_eq!(body["message"], "Operations executed: cr");
        assert_eq!(body["data"][0]["data"], body["randomData"]);
    }

    #[tokio::test]
    async fn test_crud_rejects_unknown_letters() {
        let (status, body) = post_json("/crud", r#"{"operation":"CRX"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_crud_rejects_malformed_json() {
        let (status, body) = post_json("/crud", "{").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON");
    }
}
