use serde::Serialize;
use uuid::Uuid;

/// A registered account as stored in the `users` table.
///
/// `User` itself is never serialized into a response; handlers convert it to
/// [`UserResponse`], which has no hash field at all, so the password hash
/// cannot leak through any JSON representation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// External representation of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
