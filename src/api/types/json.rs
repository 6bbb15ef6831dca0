//! Custom JSON extractor that returns errors as JSON

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON extractor whose rejections use the bench's error body
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection rendered as an [`ApiError`]
#[derive(Debug)]
pub struct JsonRejection(ApiError);

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection(ApiError::new(
                rejection.status(),
                "Invalid JSON",
                format_rejection_message(&rejection),
            ))),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        operation: String,
    }

    fn request(body: &'static str, content_type: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/crud");

        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let Json(payload) = Json::<Payload>::from_request(
            request(r#"{"operation":"CR"}"#, Some("application/json")),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(payload.operation, "CR");
    }

    #[tokio::test]
    async fn test_syntax_error_is_rendered_as_json_error() {
        let rejection = Json::<Payload>::from_request(request("{", Some("application/json")), &())
            .await
            .unwrap_err();

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let rejection = Json::<Payload>::from_request(request("{}", None), &())
            .await
            .unwrap_err();

        assert_eq!(rejection.0.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(rejection.0.response.message.contains("Content-Type"));
    }

    #[test]
    fn test_json_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
        assert_eq!(json.into_inner(), "hello");
    }
}
