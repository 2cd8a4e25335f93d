//! JSON body extractor and response wrapper for the user API

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::{ApiError, ApiErrorDetail, ApiErrorType};

/// JSON extractor whose rejections use the API error envelope
///
/// Bodies that parse but do not fit the target type are reported as
/// `400 Bad Request` rather than axum's default `422`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumJson::<T>::from_request(req, state)
            .await
            .map(|AxumJson(value)| Json(value))
            .map_err(|rejection| body_error(&rejection))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

fn body_error(rejection: &JsonRejection) -> ApiError {
    let (status, message) = match rejection {
        JsonRejection::JsonSyntaxError(err) => (
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON syntax: {}", err.body_text()),
        ),
        JsonRejection::JsonDataError(err) => (
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON data: {}", err.body_text()),
        ),
        JsonRejection::MissingJsonContentType(err) => (
            err.status(),
            "Missing Content-Type header. Expected 'application/json'.".to_string(),
        ),
        JsonRejection::BytesRejection(err) => (
            err.status(),
            format!("Failed to read request body: {}", err.body_text()),
        ),
        other => (other.status(), "Invalid JSON request".to_string()),
    };

    let detail = ApiErrorDetail::new(ApiErrorType::InvalidRequestError, message)
        .with_code("json_parse_error");

    ApiError::with_status(status, detail)
}
