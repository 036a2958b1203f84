//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;

/// Application state shared with handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Application name from `APP_NAME`, fixed at startup.
    pub app_name: Option<Arc<str>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(app_name: Option<&str>) -> Self {
        Self {
            app_name: app_name.map(Arc::from),
        }
    }

    /// Create app state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_name.as_deref())
    }
}

/// Root status response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Always "Gitops".
    pub status: &'static str,
    /// Always "1.0".
    pub level: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "Application is Healthy".
    pub status: &'static str,
    /// RFC 3339 UTC timestamp, millisecond precision.
    pub timestamp: String,
}

/// App name response.
#[derive(Debug, Serialize)]
pub struct AppNameResponse {
    /// Configured application name, `null` when unset.
    pub application_name: Option<String>,
}

/// Root handler.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        status: "Gitops",
        level: "1.0",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    debug!(%timestamp, "health check");

    Json(HealthResponse {
        status: "Application is Healthy",
        timestamp,
    })
}

/// App name handler.
pub async fn app_name(State(state): State<AppState>) -> impl IntoResponse {
    Json(AppNameResponse {
        application_name: state.app_name.as_deref().map(str::to_owned),
    })
}
