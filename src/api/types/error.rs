//! Error envelope returned by every failing user API call
//!
//! Bodies look like `{"error": {"message", "type", "param"?, "code"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

const STORAGE_FAILURE_MESSAGE: &str = "Storage failure while handling the request";

/// Error categories reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ServerError,
}

impl ApiErrorType {
    /// Status code used when nothing more specific applies
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequestError => StatusCode::BAD_REQUEST,
            Self::NotFoundError => StatusCode::NOT_FOUND,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequestError => "invalid_request_error",
            Self::NotFoundError => "not_found_error",
            Self::ServerError => "server_error",
        }
    }
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Contents of the `error` object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    /// Request field the failure refers to, e.g. `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Machine-readable reason, e.g. `invalid_id` or `validation_error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiErrorDetail {
    pub fn new(error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_type,
            param: None,
            code: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Failure of a user API call, rendered as status plus envelope
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: ApiErrorDetail,
}

impl ApiError {
    /// Error whose status follows from its type
    pub fn new(error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self::with_status(error_type.status(), ApiErrorDetail::new(error_type, message))
    }

    /// Error with an explicit status, for cases like `415`
    pub fn with_status(status: StatusCode, detail: ApiErrorDetail) -> Self {
        Self { status, detail }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorType::InvalidRequestError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorType::NotFoundError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorType::ServerError, message)
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.detail = self.detail.with_param(param);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.detail = self.detail.with_code(code);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &ApiErrorDetail {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse { error: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => {
                Self::bad_request(message).with_code("validation_error")
            }
            DomainError::InvalidId { message } => Self::bad_request(message)
                .with_param("id")
                .with_code("invalid_id"),
            DomainError::Storage { message } => {
                // Store details (hosts, SQL) stay in the logs.
                error!(error = %message, "User store failure");
                Self::internal(STORAGE_FAILURE_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.detail.error_type, self.status, self.detail.message)
    }
}

impl std::error::Error for ApiError {}
