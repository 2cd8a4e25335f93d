//! User infrastructure module
//!
//! This module provides the user store implementations (in-memory and
//! PostgreSQL) and the user service that validates input before
//! delegating to a store.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
