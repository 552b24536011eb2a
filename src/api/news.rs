//! Provides a client for the NewsAPI top-headlines API.

use crate::error::{AppError, Result};
use crate::models::{Article, HeadlinesResponse};
use reqwest::{header, Client, StatusCode};
use tracing::{debug, error, info};

const BASE_URL: &str = "https://newsapi.org/v2";

/// Headlines are always fetched for this country; no parameter is exposed.
const COUNTRY: &str = "mx";

// NewsAPI rejects requests that carry no User-Agent header.
const USER_AGENT: &str = concat!("infohub/", env!("CARGO_PKG_VERSION"));

/// An asynchronous client for fetching top news headlines.
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    /// Creates a new `NewsClient` with the provided API key.
    ///
    /// Uses the default NewsAPI base URL.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new `NewsClient` with a custom base URL.
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

    /// Fetches the current top headlines, preserving upstream order.
    ///
    /// Corresponds to the `/top-headlines` endpoint.
    pub async fn get_top_headlines(&self) -> Result<Vec<Article>> {
        info!("Fetching top headlines for {}", COUNTRY);

        let url = format!("{}/top-headlines", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .query(&[("country", COUNTRY), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching headlines: {}", e);
                AppError::Transport(e.into())
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!(
                "Headlines request rejected with status {}; check NEWS_API_KEY validity",
                status
            );
            return Err(AppError::Unauthorized(format!(
                "news upstream rejected credentials (status {status})"
            )));
        }

        let response = response.error_for_status().map_err(|e| {
            error!(
                "Headlines request failed with status {}: {}",
                e.status().map(|s| s.to_string()).unwrap_or_default(),
                e
            );
            AppError::Transport(e.into())
        })?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading headlines response body: {}", e);
            AppError::Transport(e.into())
        })?;

        let parsed: HeadlinesResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Headlines response did not match the expected schema: {}", e);
            AppError::MalformedResponse(e.into())
        })?;

        debug!(
            "Received {} of {} headlines",
            parsed.articles.len(),
            parsed.total_results.unwrap_or(parsed.articles.len() as u32)
        );

        Ok(parsed.articles)
    }
}
