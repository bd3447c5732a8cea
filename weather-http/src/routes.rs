use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{info, warn};
use weather_core::{CurrentWeather, WeatherApiClient, WeatherError};

#[derive(Clone)]
struct AppState {
    client: Arc<WeatherApiClient>,
}

pub fn router(client: WeatherApiClient) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weather", get(get_weather).post(post_weather))
        .route("/health", get(health))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            client: Arc::new(client),
        })
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct CoordinatesRequest {
    latitude: f64,
    longitude: f64,
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<CurrentWeather>, ApiError> {
    info!(lat = query.lat, lon = query.lon, "GET /weather");

    let weather = state.client.current(query.lat, query.lon).await?;
    Ok(Json(weather))
}

async fn post_weather(
    State(state): State<AppState>,
    Json(coordinates): Json<CoordinatesRequest>,
) -> Result<Json<CurrentWeather>, ApiError> {
    info!(
        lat = coordinates.latitude,
        lon = coordinates.longitude,
        "POST /weather"
    );

    let weather = state
        .client
        .current(coordinates.latitude, coordinates.longitude)
        .await?;
    Ok(Json(weather))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy", "message": "API is running"}))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Lookup failures become `400 {"detail": ...}`. Upstream rejections keep
/// the client-error class as well, mirroring the provider's own status.
/// Anything that panics past the handlers is caught by `CatchPanicLayer`
/// and answered with a 500 instead of taking the process down.
struct ApiError(WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "weather lookup failed");

        (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": self.0.to_string()})),
        )
            .into_response()
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Weather API</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .container { max-width: 600px; margin: 0 auto; }
            code { background-color: #f4f4f4; padding: 2px 6px; border-radius: 3px; }
        </style>
    </head>
    <body>
        <div class="container">
            <h1>Weather API</h1>
            <p>Real-time current conditions by coordinate.</p>

            <h2>Endpoints</h2>
            <ul>
                <li><code>GET /weather?lat=41.0082&amp;lon=28.9784</code></li>
                <li><code>POST /weather</code> with <code>{"latitude": 41.0082, "longitude": 28.9784}</code></li>
                <li><code>GET /health</code></li>
            </ul>

            <h2>Example coordinates</h2>
            <ul>
                <li><strong>Istanbul:</strong> 41.0082, 28.9784</li>
                <li><strong>Ankara:</strong> 39.9334, 32.8597</li>
                <li><strong>Izmir:</strong> 38.4192, 27.1287</li>
            </ul>
        </div>
    </body>
</html>
"#;
