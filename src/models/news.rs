//! Data structures for the NewsAPI top-headlines endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response structure for the `/top-headlines` endpoint.
#[allow(dead_code)] // Envelope fields are not all used currently
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    /// `"ok"` on success; error responses carry `"error"` plus a code.
    pub status: String,
    pub total_results: Option<u32>,
    pub articles: Vec<Article>,
}

/// A single headline article.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

/// The outlet an article was published by.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}
