//! Provides a client for the OpenWeather current-weather API.

use crate::error::{AppError, Result};
use crate::models::WeatherReport;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// City used when the caller does not name one.
pub const DEFAULT_CITY: &str = "Guadalajara";

/// An asynchronous client for fetching the current weather for a named city.
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Creates a new `WeatherClient` with the provided API key.
    ///
    /// Uses the default OpenWeather base URL.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new `WeatherClient` with a custom base URL.
    ///
    /// This is primarily intended for testing purposes (e.g., using a mock server).
    #[cfg(test)]
    pub fn new_with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.to_string(),
        }
    }

    /// Fetches the current weather report for `city`, defaulting to
    /// [`DEFAULT_CITY`] when `None` is passed.
    ///
    /// Corresponds to the `/weather` endpoint; readings are metric and
    /// descriptions Spanish.
    pub async fn get_weather(&self, city: Option<&str>) -> Result<WeatherReport> {
        let city = city.unwrap_or(DEFAULT_CITY);

        info!("Fetching current weather for {}", city);

        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "es"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching weather for {}: {}", city, e);
                AppError::Transport(e.into())
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!(
                "Weather request for {} rejected with status {}; check WEATHER_API_KEY validity",
                city, status
            );
            return Err(AppError::Unauthorized(format!(
                "weather upstream rejected credentials (status {status})"
            )));
        }

        let response = response.error_for_status().map_err(|e| {
            error!(
                "Weather request for {} failed with status {}: {}",
                city,
                e.status().map(|s| s.to_string()).unwrap_or_default(),
                e
            );
            AppError::Transport(e.into())
        })?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading weather response body: {}", e);
            AppError::Transport(e.into())
        })?;

        let report: WeatherReport = serde_json::from_str(&body).map_err(|e| {
            error!("Weather response did not match the expected schema: {}", e);
            AppError::MalformedResponse(e.into())
        })?;

        debug!("Received weather report for {}", report.name);

        Ok(report)
    }
}
