//! Infrastructure layer - User stores, logging and metrics

pub mod logging;
pub mod observability;
pub mod user;
