//! Observability configuration

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_METRICS_PATH: &str = "/metrics";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Prometheus scrape endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route the scrape endpoint is mounted on, next to the API routes
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}

/// Reasons a configured metrics path cannot be mounted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsPathError {
    #[error("metrics path '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("metrics path '{0}' must be a literal route without '{{', '}}' or '*'")]
    NotLiteral(String),

    #[error("metrics path '{0}' is already served by the API")]
    Taken(String),
}

impl MetricsConfig {
    /// Check that `path` can be merged next to the routes in `taken`
    ///
    /// Skipped when metrics are disabled, since nothing gets mounted.
    pub fn validate(&self, taken: &[&str]) -> Result<(), MetricsPathError> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.path.as_str();

        if !path.starts_with('/') {
            return Err(MetricsPathError::MissingLeadingSlash(path.to_string()));
        }

        if path.contains(['{', '}', '*']) {
            return Err(MetricsPathError::NotLiteral(path.to_string()));
        }

        if taken.contains(&path) {
            return Err(MetricsPathError::Taken(path.to_string()));
        }

        Ok(())
    }
}
