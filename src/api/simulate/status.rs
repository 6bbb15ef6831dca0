use axum::{extract::Query, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::lenient_int;
use crate::api::types::{iso_timestamp, ApiError, Json};

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
    pub timestamp: String,
}

/// Body echoed for `code`
fn describe(code: u16) -> StatusResponse {
    let (error, message) = match code {
        200..=299 => (None, format!("Successful response with code {}", code)),
        300..=399 => (None, format!("Redirection with code {}", code)),
        400..=499 => (
            Some(format!("Client error {}", code)),
            format!("Simulated client error code {}", code),
        ),
        _ => (
            Some(format!("Server error {}", code)),
            format!("Simulated server error code {}", code),
        ),
    };

    StatusResponse {
        status: code,
        error,
        message,
        timestamp: iso_timestamp(),
    }
}

/// `GET /status?code=<n>`
pub async fn status(Query(query): Query<StatusQuery>) -> Result<impl IntoResponse, ApiError> {
    let code = lenient_int(query.code.as_deref()).unwrap_or(200);

    let status = u16::try_from(code)
        .ok()
        .filter(|code| (200..=999).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| ApiError::bad_request(format!("Unsupported status code {}", code)))?;

    Ok((status, Json(describe(status.as_u16()))))
}
