use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A blog post as stored in the `posts` table.
///
/// Single-post lookups serialize this directly, exposing `author` as the raw
/// user id. List endpoints join against `users` and return
/// [`PostWithAuthor`] instead.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: Uuid,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author reference populated with a display name.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

/// A post with its author resolved to `{_id, username}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthor {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: AuthorSummary,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
