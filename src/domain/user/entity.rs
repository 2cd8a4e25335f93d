//! User entity and related types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{parse_user_id, validate_new_user, UserValidationError, UserValidationErrors};

/// Store-assigned numeric user identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_user_id(s).map(Self)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Create a new user payload after validation
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationErrors> {
        Self::from_parts(Some(name.into()), Some(email.into()))
    }

    /// Create a new user payload from possibly missing fields
    pub fn from_parts(
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationErrors> {
        validate_new_user(name.as_deref(), email.as_deref())?;

        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attach the identifier assigned by the store
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Rebuild a user from stored fields
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = "1".parse().unwrap();
        assert_eq!(id.value(), 1);
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_user_id_from_str_invalid() {
        let result = "invalid".parse::<UserId>();
        assert_eq!(
            result,
            Err(UserValidationError::MalformedId("invalid".to_string()))
        );
    }

    #[test]
    fn test_new_user_valid() {
        let new_user = NewUser::new("Test User", "test@example.com").unwrap();
        assert_eq!(new_user.name(), "Test User");
        assert_eq!(new_user.email(), "test@example.com");
    }

    #[test]
    fn test_new_user_rejects_invalid_fields() {
        assert!(NewUser::new("", "test@example.com").is_err());
        assert!(NewUser::new("Test User", "invalid-email").is_err());
    }

    #[test]
    fn test_new_user_from_missing_parts() {
        let errors = NewUser::from_parts(None, Some("test@example.com".to_string())).unwrap_err();
        assert_eq!(errors.errors(), &[UserValidationError::MissingName]);
    }

    #[test]
    fn test_into_user_assigns_id() {
        let user = NewUser::new("Test User", "test@example.com")
            .unwrap()
            .into_user(UserId::new(1));

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Test User");
        assert_eq!(user.email(), "test@example.com");
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User::new(UserId::new(1), "Test User", "test@example.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Test User",
                "email": "test@example.com"
            })
        );
    }
}
