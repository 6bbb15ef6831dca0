use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::ChainRequest;
use crate::infrastructure::observability::record_chain_hop;

/// `GET /chain?seq=&traceId=`
///
/// Answers 500 when this hop failed, 200 otherwise, always with the hop's
/// chain response as body.
pub async fn chain(
    State(state): State<AppState>,
    Query(request): Query<ChainRequest>,
) -> impl IntoResponse {
    let started = Instant::now();
    let outcome = state.coordinator.handle(request).await;

    record_chain_hop(outcome.state.as_str(), started.elapsed());

    let status = if outcome.state.is_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(outcome.response))
}
