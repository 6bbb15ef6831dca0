use std::time::{Duration, Instant};

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lenient_int;
use crate::api::state::AppState;
use crate::api::types::{iso_timestamp, Json};
use crate::config::SimulatorConfig;

#[derive(Debug, Default, Deserialize)]
pub struct DelayQuery {
    pub delay: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayResponse {
    pub message: String,
    pub requested_delay: u64,
    pub actual_delay: u64,
    pub timestamp: String,
}

/// Milliseconds to sleep for a raw `delay` value
fn requested_delay(raw: Option<&str>, config: &SimulatorConfig) -> u64 {
    match lenient_int(raw) {
        None => config.default_delay_ms,
        Some(ms) => (ms.max(0) as u64).min(config.max_delay_ms),
    }
}

/// `GET /delay?delay=<ms>`
pub async fn delay(
    State(state): State<AppState>,
    Query(query): Query<DelayQuery>,
) -> Json<DelayResponse> {
    let delay = requested_delay(query.delay.as_deref(), &state.simulators);
    debug!(delay_ms = delay, "Delaying response");

    let start = Instant::now();
    tokio::time::sleep(Duration::from_millis(delay)).await;

    Json(DelayResponse {
        message: format!("Response delayed by {}ms", delay),
        requested_delay: delay,
        actual_delay: start.elapsed().as_millis() as u64,
        timestamp: iso_timestamp(),
    })
}
