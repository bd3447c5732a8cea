//! Binary crate for the weather HTTP server.
//!
//! This crate focuses on:
//! - Routing and request/response mapping (axum)
//! - Translating core failures into HTTP status codes
//! - Request logging

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, WeatherApiClient};
use weather_http::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_http=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let client = WeatherApiClient::from_config(&config)?;

    let app = routes::router(client);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "weather HTTP server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
