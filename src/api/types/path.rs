//! Path extractor for numeric user IDs

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::ApiError;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Extracts the `{id}` path segment as a [`UserId`]
///
/// Segments that are not integers are rejected with `400 Bad Request`
/// before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::bad_request(rejection.body_text())
                    .with_param("id")
                    .with_code("invalid_id")
            })?;

        raw.parse::<UserId>()
            .map(Self)
            .map_err(|e| ApiError::from(DomainError::invalid_id(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo(UserIdPath(id): UserIdPath) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/users/{id}", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_integer_segment() {
        let (status, body) = call("/users/42").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_non_integer_segment() {
        let (status, body) = call("/users/invalid").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("\"param\":\"id\""));
        assert!(body.contains("\"code\":\"invalid_id\""));
        assert!(body.contains("User ID must be an integer, got 'invalid'"));
    }

    #[tokio::test]
    async fn test_overflowing_segment() {
        let (status, _) = call("/users/99999999999999999999").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
