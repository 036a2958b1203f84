//! Listener binding and the serve loop.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Bind the HTTP listener on the configured port.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr();

    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
