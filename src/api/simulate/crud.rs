use axum::{extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{iso_timestamp, ApiError, Json};
use crate::domain::{CrudFlags, Record};
use crate::infrastructure::crud::OperationOutcome;

#[derive(Debug, Default, Deserialize)]
pub struct CrudRequest {
    #[serde(default)]
    pub operation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrudResponse {
    pub operations: Vec<OperationOutcome>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
    pub message: String,
    pub random_data: String,
}

/// `POST /crud {"operation": "CRUD"}`
pub async fn crud(
    State(state): State<AppState>,
    Json(request): Json<CrudRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let timestamp = iso_timestamp();
    let flags = CrudFlags::parse(&request.operation)?;
    let report = state.crud_service.execute(flags).await?;

    Ok(Json(CrudResponse {
        operations: report.operations,
        timestamp,
        data: report.data,
        message: format!("Operations executed: {}", request.operation),
        random_data: report.random_data,
    }))
}
