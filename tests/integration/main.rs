//! Integration tests for the GitOps demo service.
//!
//! These tests bind a real socket through `server::bind` and talk to it over
//! HTTP. Run with: cargo test --test integration

use std::net::TcpListener as StdListener;

use gitops_demo::api::{create_router, AppState};
use gitops_demo::config::Config;
use gitops_demo::server;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// A running server plus the handle to stop it.
struct TestServer {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<gitops_demo::Result<()>>,
}

impl TestServer {
    /// Start a server for the given environment variables.
    ///
    /// `PORT` is filled in with a free port when not supplied.
    async fn start(vars: &[(&str, &str)]) -> Self {
        let mut vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        if !vars.iter().any(|(k, _)| k == "PORT") {
            vars.push(("PORT".to_string(), free_port().to_string()));
        }

        let config = Config::from_vars(vars).unwrap();
        config.validate().unwrap();

        let listener = server::bind(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), config.port);

        let router = create_router(AppState::from_config(&config));
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server::run(listener, router, async move {
            rx.await.ok();
        }));

        Self {
            base_url: format!("http://127.0.0.1:{}", config.port),
            shutdown: tx,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(self) {
        self.shutdown.send(()).ok();
        self.handle.await.unwrap().unwrap();
    }
}

/// Ask the OS for a port that is free right now.
fn free_port() -> u16 {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn serves_all_endpoints_over_http() {
    let server = TestServer::start(&[("APP_NAME", "demo")]).await;
    let client = reqwest::Client::new();

    let root: Value = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root, json!({ "status": "Gitops", "level": "1.0" }));

    let health = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    let health: Value = health.json().await.unwrap();
    assert_eq!(health["status"], "Application is Healthy");
    assert!(chrono::DateTime::parse_from_rfc3339(health["timestamp"].as_str().unwrap()).is_ok());

    let app_name: Value = client
        .get(server.url("/app-name"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(app_name, json!({ "application_name": "demo" }));

    server.stop().await;
}

#[tokio::test]
async fn app_name_is_null_when_unset() {
    let server = TestServer::start(&[("APP_NAME", "")]).await;

    let body: Value = reqwest::get(server.url("/app-name"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "application_name": null }));

    server.stop().await;
}

#[tokio::test]
async fn listens_on_configured_port() {
    let port = free_port();
    let port_var = port.to_string();
    let server = TestServer::start(&[("PORT", port_var.as_str())]).await;

    assert_eq!(server.base_url, format!("http://127.0.0.1:{}", port));
    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn unknown_route_is_not_ok() {
    let server = TestServer::start(&[]).await;

    let response = reqwest::get(server.url("/nonexistent")).await.unwrap();
    assert_ne!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let taken = StdListener::bind("0.0.0.0:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let config = Config::from_vars([("PORT", port.to_string())]).unwrap();
    let err = server::bind(&config).await.unwrap_err();
    assert!(matches!(err, gitops_demo::AppError::Bind { .. }));
}
