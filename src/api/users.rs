//! User endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UserIdPath};
use crate::domain::user::User;
use crate::infrastructure::user::CreateUserRequest;

/// Request body for creating a user
///
/// A client-supplied `id` is accepted but ignored; the store assigns IDs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// User representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if let Some(id) = request.id {
        debug!(id, "Ignoring client-supplied user ID");
    }

    let user = state
        .user_service
        .create(CreateUserRequest {
            name: request.name,
            email: request.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state.user_service.get(id).await.map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}
