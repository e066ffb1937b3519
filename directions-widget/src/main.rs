use std::error::Error;

use tracing_subscriber::EnvFilter;

use directions_widget::config::ServerConfig;
use directions_widget::routing::{
    CachedDirectionsClient, DirectionsClient, MockDirectionsClient, RouteService,
};
use directions_widget::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("directions_widget=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let routes = match &config.mock_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving recorded directions");
            RouteService::Mock(MockDirectionsClient::new(dir)?)
        }
        None => {
            if config.access_token.is_none() {
                tracing::warn!("MAPBOX_ACCESS_TOKEN not set, route requests will fail");
            }
            let client = DirectionsClient::new(config.directions_config())?;
            RouteService::Live(CachedDirectionsClient::new(client, &config.cache))
        }
    };

    let app = create_router(AppState::new(routes), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "directions widget listening");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  GET  /directions           - Routes between two points");
    tracing::info!("  POST /render/instructions  - Instructions panel for a snapshot");
    tracing::info!("  POST /render/inputs        - Inputs panel for a snapshot");

    axum::serve(listener, app).await?;
    Ok(())
}
