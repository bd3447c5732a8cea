use reqwest::StatusCode;
use thiserror::Error;

/// Everything a single weather lookup can fail with.
///
/// The first three variants are produced before any network I/O happens;
/// the rest describe the one outbound provider call. Every failure is
/// terminal for that call — there is no retry.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("latitude {0} is out of range, must be between -90 and 90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range, must be between -180 and 180")]
    LongitudeOutOfRange(f64),

    #[error("no API key configured, set WEATHER_API_KEY or add it to the config file")]
    MissingApiKey,

    /// Provider answered with a non-2xx status.
    #[error("weather provider returned status {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// Network fault or timeout on the outbound call.
    #[error("failed to reach weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response that was not valid JSON.
    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    /// 2xx response missing one of the required fields.
    #[error("temperature data not found in provider response")]
    MissingData,
}

impl WeatherError {
    /// True for failures caused by the caller's input rather than the
    /// provider call. Useful when a transport wants to distinguish them.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WeatherError::LatitudeOutOfRange(_) | WeatherError::LongitudeOutOfRange(_)
        )
    }
}
