//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;

use chrono::{SecondsFormat, Utc};

/// Current time as an RFC 3339 string with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
