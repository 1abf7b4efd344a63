//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = api::build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        tracing::info!("CarriAcces listening on http://{}", addr);

        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        let serve = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        // Graceful shutdown waits for in-flight requests, bounded by the budget
        // once the signal has fired.
        tokio::select! {
            result = serve => result?,
            _ = async {
                shutdown_signal().await;
                tokio::time::sleep(timeout).await;
            } => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Shutdown timeout elapsed, dropping remaining connections"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
