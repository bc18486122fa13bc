//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::GateConfig;
use crate::error::{GateError, GateResult};
use tokio::net::TcpListener;

/// Launch gate server
pub struct Server {
    config: GateConfig,
    state: AppState,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: GateConfig) -> Self {
        let state = AppState::from_config(&config);
        Self { config, state }
    }

    /// Build the router without binding a socket
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone(), self.config.server.enable_cors)
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> GateResult<()> {
        let addr = self.config.server.listen_addr;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> GateResult<()> {
        let addr = listener.local_addr()?;
        let app = self.router();

        tracing::info!("Launch gate listening on {}", addr);
        tracing::info!(
            coming_soon_mode = self.config.site.coming_soon_mode,
            launch_at = ?self.config.site.launch_at(),
            environment = ?self.config.environment,
            admin_configured = self.state.credential.is_configured(),
            "Gate configuration"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| GateError::Server(e.to_string()))?;

        tracing::info!("Launch gate shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
