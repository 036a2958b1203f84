//! GitOps demo service.
//!
//! A small HTTP service used to exercise deployment pipelines. It exposes a
//! fixed status document, a health check and an echo of the `APP_NAME`
//! environment variable:
//!
//! ```text
//! GET /          {"status":"Gitops","level":"1.0"}
//! GET /health    {"status":"Application is Healthy","timestamp":"2024-05-01T12:00:00.123Z"}
//! GET /app-name  {"application_name":"demo"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`server`]: Listener binding and serve loop
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
