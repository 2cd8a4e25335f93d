//! Health check endpoints for Kubernetes probes

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;

use crate::api::types::Json;

use super::state::AppState;

const USER_STORE_CHECK: &str = "user_store";

/// Body of `/health` and `/ready`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthResponse {
    fn new(status: HealthStatus) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: Vec::new(),
            latency_ms: None,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Outcome of probing one dependency
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: HealthStatus,
    /// Number of stored users when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

/// GET /health - the process is up and serving
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::new(HealthStatus::Healthy)))
}

/// GET /live - bare liveness signal
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /ready - 503 until the user store answers
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let check = check_user_store(&state).await;

    let mut response = HealthResponse::new(check.status);
    response.checks.push(check);
    response.latency_ms = Some(elapsed_ms(start.elapsed()));

    (response.status_code(), Json(response))
}

async fn check_user_store(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.user_service.count().await;
    let latency_ms = elapsed_ms(start.elapsed());

    match result {
        Ok(users) => HealthCheck {
            name: USER_STORE_CHECK,
            status: HealthStatus::Healthy,
            users: Some(users),
            message: None,
            latency_ms,
        },
        Err(e) => {
            warn!(error = %e, "User store readiness check failed");

            HealthCheck {
                name: USER_STORE_CHECK,
                status: HealthStatus::Unhealthy,
                users: None,
                message: Some("User store unavailable".to_string()),
                latency_ms,
            }
        }
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
