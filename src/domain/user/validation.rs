//! User validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID must be an integer, got '{0}'")]
    MalformedId(String),

    #[error("Name is required")]
    MissingName,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Email is required")]
    MissingEmail,

    #[error("Email '{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),
}

impl UserValidationError {
    /// Name of the payload field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::MalformedId(_) => "id",
            Self::MissingName | Self::EmptyName | Self::NameTooLong(_) => "name",
            Self::MissingEmail | Self::InvalidEmail(_) | Self::EmailTooLong(_) => "email",
        }
    }
}

/// Every failure found while validating a user payload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserValidationErrors(Vec<UserValidationError>);

impl UserValidationErrors {
    pub fn errors(&self) -> &[UserValidationError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields that failed, in the order they were checked
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();

        for error in &self.0 {
            if !fields.contains(&error.field()) {
                fields.push(error.field());
            }
        }

        fields
    }

    fn push(&mut self, error: UserValidationError) {
        self.0.push(error);
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for UserValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for UserValidationErrors {}

const MAX_NAME_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Parse a user ID from its textual form (e.g. a path segment)
pub fn parse_user_id(raw: &str) -> Result<i64, UserValidationError> {
    raw.parse::<i64>()
        .map_err(|_| UserValidationError::MalformedId(raw.to_string()))
}

/// Validate a user name
///
/// Rules:
/// - Cannot be empty or whitespace only
/// - Maximum 255 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Maximum 254 characters
/// - `local@domain`, where the local part is dot-separated atoms and the
///   domain is dot-separated labels that start and end alphanumeric
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validate a user creation payload, collecting every failing field
pub fn validate_new_user(
    name: Option<&str>,
    email: Option<&str>,
) -> Result<(), UserValidationErrors> {
    let mut errors = UserValidationErrors::default();

    match name {
        None => errors.push(UserValidationError::MissingName),
        Some(name) => {
            if let Err(e) = validate_name(name) {
                errors.push(e);
            }
        }
    }

    match email {
        None => errors.push(UserValidationError::MissingEmail),
        Some(email) => {
            if let Err(e) = validate_email(email) {
                errors.push(e);
            }
        }
    }

    errors.into_result()
}
