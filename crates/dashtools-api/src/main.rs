//! DashTools API server entry point

use anyhow::Result;
use dashtools_api::ApiServer;
use dashtools_config::ConfigManager;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigManager::new().load_config()?;

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    tracing::info!("Starting DashTools API (api url {})", config.api_url);

    let server = ApiServer::from_config(config)?;
    match server.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("API server error: {:#}", e);
            Err(e)
        }
    }
}
