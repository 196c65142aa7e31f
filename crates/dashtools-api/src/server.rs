//! HTTP server

use anyhow::{Context, Result};
use axum::Router;
use dashtools_config::DashboardConfig;
use dashtools_plugins::PluginRegistry;
use dashtools_themes::ThemeState;
use tokio::net::TcpListener;

use crate::{routes, state::AppState};

/// Plugin API server
#[derive(Debug)]
pub struct ApiServer {
    config: DashboardConfig,
    state: AppState,
}

impl ApiServer {
    /// Server over the built-in plugins with defaults from `config`
    pub fn from_config(config: DashboardConfig) -> Result<Self> {
        let registry = PluginRegistry::builtin().context("Failed to build plugin registry")?;
        Ok(Self::new(config, registry))
    }

    /// Server over an explicit registry
    pub fn new(config: DashboardConfig, registry: PluginRegistry) -> Self {
        let state = AppState::new(registry, ThemeState::from_config(&config));
        Self { config, state }
    }

    /// Shared state handed to handlers
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The complete application router
    pub fn router(&self) -> Router {
        routes::all_routes().with_state(self.state.clone())
    }

    /// Bind and serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;

        tracing::info!(
            "Serving {} plugins on http://{} (default theme {})",
            self.state.registry.len(),
            address,
            self.state.theme_defaults
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
