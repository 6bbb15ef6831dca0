//! Responses for unmatched routes and panicking handlers

use std::any::Any;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use tracing::error;

use super::types::ApiError;

/// 404 body naming the method and path that matched nothing
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} {} not found", method, uri.path()))
}

/// Turns a handler panic into the generic 500 body
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    ApiError::internal("Something went wrong").into_response()
}
