//! Application configuration loaded once at startup.
//!
//! Secrets are read from the process environment (optionally seeded from a
//! `.env` file) into an explicit `Config` value that is passed to the API
//! clients, so no client reads global state on its own.

use crate::error::{AppError, Result};
use std::env;
use tracing::error;

/// Environment variable holding the OpenWeather API key.
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";
/// Environment variable holding the NewsAPI key.
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Secrets required by the upstream APIs.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the OpenWeather current-weather endpoint.
    pub weather_api_key: String,
    /// API key for the NewsAPI top-headlines endpoint.
    pub news_api_key: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honored if present. Both API
    /// keys are required; a missing or empty variable fails with
    /// `AppError::Configuration` before any network call is attempted.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            weather_api_key: require_var(WEATHER_API_KEY_VAR)?,
            news_api_key: require_var(NEWS_API_KEY_VAR)?,
        })
    }
}

/// Reads a required environment variable, treating an empty value as absent.
fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            error!("{} environment variable not set", name);
            Err(AppError::Configuration(name.to_string()))
        },
    }
}
