//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::MetricsConfig;

const HOP_DURATION_METRIC: &str = "chain_hop_duration_seconds";

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Prometheus metrics handle for serving the metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Install the global Prometheus recorder
pub fn init_metrics(config: &MetricsConfig, instance: u32) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    let builder = match PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(HOP_DURATION_METRIC.to_string()),
        &config.hop_duration_buckets,
    ) {
        Ok(builder) => builder,
        Err(e) => {
            tracing::warn!("Invalid hop duration buckets, using summaries: {}", e);
            PrometheusBuilder::new()
        }
    };

    match builder.install_recorder() {
        Ok(handle) => {
            gauge!(
                "testbench_info",
                "version" => env!("CARGO_PKG_VERSION"),
                "instance" => instance.to_string()
            )
            .set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
                path: config.path.clone(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Router serving the exposition text at the configured path
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path.clone();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record how one chain hop ended and how long its subtree took
pub fn record_chain_hop(state: &str, duration: Duration) {
    let labels = [("state", state.to_string())];

    counter!("chain_hops_total", &labels).increment(1);
    histogram!(HOP_DURATION_METRIC, &labels).record(duration.as_secs_f64());
}

/// Collapse numeric segments and cap length (unmatched routes report raw paths)
fn sanitize_path(path: &str) -> String {
    let path = NUMERIC_SEGMENT.replace_all(path, "/{id}$1");

    path.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_numeric_id() {
        assert_eq!(sanitize_path("/records/123/history"), "/records/{id}/history");
        assert_eq!(sanitize_path("/records/42"), "/records/{id}");
    }

    #[test]
    fn test_sanitize_path_no_id() {
        assert_eq!(sanitize_path("/chain"), "/chain");
    }

    #[test]
    fn test_sanitize_path_truncates_long_paths() {
        let path = "/very/long/path/that/exceeds/the/maximum/allowed/length/for/metrics";
        assert_eq!(sanitize_path(path).chars().count(), 50);
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", "/chain", 500, Duration::from_millis(3));
        record_chain_hop("failed", Duration::from_millis(3));
    }
}
