//! Core library for the weather lookup service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client (coordinate validation, fetch, normalization)
//! - Shared domain models and the error taxonomy
//!
//! It is used by `weather-http` and `weather-mcp`; both front ends delegate
//! every lookup to [`WeatherApiClient::current`] and never reimplement
//! validation or normalization themselves.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Coordinate, CurrentWeather};
pub use provider::WeatherApiClient;
