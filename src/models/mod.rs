/// Data models for blog-service
///
/// Persisted entities (`User`, `Post`) and the response shapes derived from
/// them. Entity ids serialize as `_id` and field names as camelCase, matching
/// the wire format consumed by existing clients.
pub mod post;
pub mod user;

pub use post::{AuthorSummary, Post, PostWithAuthor};
pub use user::{User, UserResponse};
