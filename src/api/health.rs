//! Health check endpoints for container probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use super::types::{iso_timestamp, Json};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub instance: u32,
    pub name: String,
    pub version: &'static str,
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
}

/// Reports that the instance is up along with its identity
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "up",
        instance: state.instance.id,
        name: state.instance.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: iso_timestamp(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
