//! User service: validation in front of the user store

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// User service for listing, creating and looking up users
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let new_user = NewUser::from_parts(request.name, request.email).map_err(|e| {
            debug!(fields = ?e.fields(), "Rejected user payload");
            DomainError::validation(e.to_string())
        })?;

        let user = self.repository.create(new_user).await?;
        info!(id = %user.id(), "Created user");

        Ok(user)
    }

    /// Get a user by ID, failing with `NotFound` when absent
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        debug!(id = %id, "Looking up user");

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
