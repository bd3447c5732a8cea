//! Binary crate for the MCP weather server (stdio transport).
//!
//! Registers the shared weather lookup as a callable tool; all validation
//! and normalization happens in `weather-core`.

use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, WeatherApiClient};

mod service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout belongs to the MCP transport; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather server");

    let config = Config::load()?;
    let client = WeatherApiClient::from_config(&config)?;

    let server = service::WeatherService::new(client)
        .serve(rmcp::transport::stdio())
        .await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
