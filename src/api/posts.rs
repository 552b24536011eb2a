//! Provides a client for the dummyjson social-post feed.

use crate::error::{AppError, Result};
use crate::models::{Post, PostsResponse};
use reqwest::Client;
use tracing::{debug, error, info};

const BASE_URL: &str = "https://dummyjson.com";

/// An asynchronous client for fetching posts from the social feed.
///
/// The feed is public; no credentials are involved.
pub struct PostsClient {
    client: Client,
    base_url: String,
}

impl PostsClient {
    /// Creates a new `PostsClient` against the default base URL.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new `PostsClient` with a custom base URL.
    ///
    /// This is primarily intended for testing purposes (e.g., using a mock server).
    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetches the post list, preserving upstream order.
    ///
    /// Corresponds to the `/posts` endpoint of the feed.
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        info!("Fetching social posts");

        let url = format!("{}/posts", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Error fetching posts: {}", e);
            AppError::Transport(e.into())
        })?;

        let response = response.error_for_status().map_err(|e| {
            error!(
                "Posts request failed with status {}: {}",
                e.status().map(|s| s.to_string()).unwrap_or_default(),
                e
            );
            AppError::Transport(e.into())
        })?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading posts response body: {}", e);
            AppError::Transport(e.into())
        })?;

        let parsed: PostsResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Posts response did not match the expected schema: {}", e);
            AppError::MalformedResponse(e.into())
        })?;

        debug!("Received {} posts", parsed.posts.len());

        Ok(parsed.posts)
    }
}
