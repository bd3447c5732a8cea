use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Service configuration, read once at startup.
///
/// Sources, in increasing precedence:
/// 1. built-in defaults,
/// 2. the TOML config file (if present),
/// 3. environment variables (`WEATHER_API_KEY`, `WEATHER_API_BASE_URL`).
///
/// The API key is deliberately carried here and injected into the client at
/// construction time; nothing in the crates reads it from a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// WeatherAPI.com API key. Absence is reported as a configuration
    /// failure before any network call is attempted.
    pub api_key: Option<String>,

    /// Provider base URL. Overridden in tests to point at a local mock.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on the single outbound call; expiry is treated as an upstream
    /// transport failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bind address for the HTTP front end.
    #[serde(default = "default_http_addr")]
    pub http_addr: String,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_http_addr() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            http_addr: default_http_addr(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults if the file doesn't exist yet),
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        let cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file, start from defaults.
            Self::default()
        };

        Ok(cfg.with_env_overrides(
            env::var("WEATHER_API_KEY").ok(),
            env::var("WEATHER_API_BASE_URL").ok(),
        ))
    }

    /// Apply environment values on top of whatever the file provided.
    /// Split out from [`Config::load`] so it can be tested without touching
    /// process environment.
    pub fn with_env_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather-service")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
