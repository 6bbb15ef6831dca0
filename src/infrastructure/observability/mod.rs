//! Observability infrastructure - Tracing, Metrics, and Trace Propagation

mod config;
mod metrics;
mod propagation;
mod tracing_setup;

pub use config::{MetricsConfig, ObservabilityConfig, TracingConfig};
pub use metrics::{
    create_metrics_router, init_metrics, record_chain_hop, record_http_request, PrometheusMetrics,
};
pub use propagation::{extract_trace_context, inject_trace_context};
pub use tracing_setup::{init_tracing, shutdown_tracing};
