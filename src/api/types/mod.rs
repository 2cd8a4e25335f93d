//! HTTP boundary types: error envelope and extractors

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use path::UserIdPath;
