//! Data Transfer Objects - form and JSON payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /admin`.
///
/// Which fields matter depends on `action`; absent fields stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminForm {
    #[serde(default)]
    pub action: String,
    pub keyname: Option<String>,
    pub password: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub blog_id: Option<String>,
}

/// A post as exposed by the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

/// All posts plus the store's fill level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub count: usize,
    pub max: usize,
}
