use axum::{extract::Query, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::api::types::Json;

#[derive(Debug, Default, Deserialize)]
pub struct FaultQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `GET /error?type=fatal|handled`
pub async fn error(Query(query): Query<FaultQuery>) -> impl IntoResponse {
    match query.kind.as_deref() {
        Some("fatal") => {
            error!("Simulated fatal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Unhandled error", "message": "Fatal error occurred"})),
            )
        }
        Some("handled") => {
            warn!("Simulated handled error");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Handled error", "message": "This is a handled error"})),
            )
        }
        _ => (StatusCode::OK, Json(json!({"message": "No error triggered"}))),
    }
}
