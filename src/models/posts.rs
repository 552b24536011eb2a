//! Data structures for the dummyjson social-post feed.

use serde::{Deserialize, Serialize};

/// Response structure for the `/posts` endpoint.
#[allow(dead_code)] // Paging fields are not all used currently
#[derive(Debug, Deserialize, Clone)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// A single social post as returned by the feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub reactions: Reactions,
    pub views: Option<u32>, // Not present on older API versions
    pub user_id: i64,
}

/// Reaction counters attached to a post.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Reactions {
    pub likes: i64,
    pub dislikes: i64,
}
