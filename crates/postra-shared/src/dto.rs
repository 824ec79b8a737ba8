//! Data Transfer Objects - request/response types for the post commands and queries.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use postra_core::domain::{Params, Post};

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: u64,
}

/// A post as presented to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub creator: String,
    pub title: String,
    pub content_uri: String,
    pub content_hash: String,
    pub created_at: i64,
    /// `created_at` rendered as RFC 3339, when representable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_rfc3339: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        let created_at_rfc3339 =
            DateTime::from_timestamp(post.created_at, 0).map(|t| t.to_rfc3339());
        Self {
            id: post.id,
            creator: post.creator,
            title: post.title,
            content_uri: post.content_uri,
            content_hash: post.content_hash,
            created_at: post.created_at,
            created_at_rfc3339,
        }
    }
}

/// Response listing every live post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub posts: Vec<PostResponse>,
    /// The id the next created post will receive.
    pub post_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsResponse {
    pub params: Params,
}
