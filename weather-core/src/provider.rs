use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::WeatherError,
    model::{Coordinate, CurrentWeather},
};

/// Client for the WeatherAPI.com `current.json` endpoint.
///
/// Holds the API key injected at construction and a reqwest client with a
/// bounded timeout. No state survives between calls; cloning is cheap and
/// the client can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    /// Build a client from configuration.
    ///
    /// A missing API key fails here, before any lookup is attempted, so the
    /// front ends surface it as a configuration error rather than an
    /// upstream one.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let api_key = config.api_key.clone().ok_or(WeatherError::MissingApiKey)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The single core operation shared by every front end: validate the
    /// coordinate ranges, issue one provider call, normalize the payload.
    ///
    /// Out-of-range input returns an error without any network I/O.
    pub async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.fetch_current(&coordinate).await
    }

    async fn fetch_current(&self, coordinate: &Coordinate) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/current.json", self.base_url);
        debug!(
            lat = coordinate.latitude(),
            lon = coordinate.longitude(),
            "fetching current conditions"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", coordinate.as_query().as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        normalize(parsed)
    }
}

// All payload fields are optional: a 2xx response missing any of them is a
// data-shape failure, not a deserialization panic.

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: Option<WaLocation>,
    current: Option<WaCurrent>,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: Option<f64>,
    condition: Option<WaCondition>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: Option<String>,
}

/// Map a structurally complete payload onto the normalized record; any
/// missing required field collapses to the same `MissingData` failure.
fn normalize(parsed: WaResponse) -> Result<CurrentWeather, WeatherError> {
    let location = parsed.location.ok_or(WeatherError::MissingData)?;
    let current = parsed.current.ok_or(WeatherError::MissingData)?;

    let temperature = current.temp_c.ok_or(WeatherError::MissingData)?;
    let condition = current
        .condition
        .and_then(|c| c.text)
        .ok_or(WeatherError::MissingData)?;
    let name = location.name.ok_or(WeatherError::MissingData)?;
    let country = location.country.ok_or(WeatherError::MissingData)?;

    Ok(CurrentWeather {
        temperature,
        location: name,
        country,
        condition,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Cut on a char boundary; provider error bodies can be localized text.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
