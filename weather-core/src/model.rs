use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A validated latitude/longitude pair.
///
/// Constructed per call and discarded after it; a `Coordinate` that exists
/// is always in range, so the fetch path never re-checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validate the ranges before anything touches the network.
    /// NaN fails both range checks and is rejected like any other
    /// out-of-range value.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The combined `"lat,lon"` form WeatherAPI.com expects in its `q`
    /// query parameter.
    pub fn as_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Normalized current-conditions record returned to every front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in degrees Celsius, passed through from the provider
    /// unmodified.
    pub temperature: f64,
    pub location: String,
    pub country: String,
    pub condition: String,
}
