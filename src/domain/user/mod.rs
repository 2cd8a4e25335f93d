//! User domain
//!
//! This module provides the user entity, structural validation rules and
//! the repository trait the user store implements.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    parse_user_id, validate_email, validate_name, validate_new_user, UserValidationError,
    UserValidationErrors,
};

#[cfg(test)]
pub use repository::MockUserRepository;
