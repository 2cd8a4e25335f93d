//! User Directory API
//!
//! A small REST service for creating, listing and looking up users:
//! - Field validation (non-blank name, well-formed email) before storage
//! - In-memory or PostgreSQL user stores
//! - Health probes and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use config::{AppConfig, StorageBackend};
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = &config.storage;

    info!("Storage backend: {:?}", storage.backend);

    let user_service: Arc<dyn UserServiceTrait> = match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory user store");
            Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
        }
        StorageBackend::Postgres => {
            let database_url = storage.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;

            info!("Connecting to PostgreSQL...");
            let repository = PostgresUserRepository::connect(
                database_url,
                storage.max_connections,
                storage.connect_timeout(),
            )
            .await?;
            repository.ensure_table().await?;
            info!("PostgreSQL connection established");

            Arc::new(UserService::new(Arc::new(repository)))
        }
    };

    Ok(AppState::new(user_service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_uses_memory_store() {
        let state = create_app_state().await.unwrap();

        assert!(state.user_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_postgres_backend_requires_url() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Postgres;

        let result = create_app_state_with_config(&config).await;

        assert!(result.is_err());
    }
}
