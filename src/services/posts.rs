/// Post service - CRUD over posts, with mutation scoped to the author
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::posts::{ListOptions, PostFilter, UpdatePostFields};
use crate::error::{AppError, Result};
use crate::models::{Post, PostWithAuthor};

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post owned by `user_id`. Any caller-supplied author is
    /// ignored; ownership always comes from the authenticated user.
    pub async fn create_post(
        &self,
        user_id: Uuid,
        title: Option<&str>,
        contents: Option<&str>,
        tags: &[String],
    ) -> Result<Post> {
        let title = match title.map(str::trim) {
            None | Some("") => return Err(AppError::Validation("title is required".to_string())),
            Some(t) => t,
        };

        let post = db::posts::insert_post(&self.pool, user_id, title, contents, tags).await?;

        tracing::info!(post_id = %post.id, author = %user_id, "post created");
        Ok(post)
    }

    pub async fn list_all_posts(&self, options: ListOptions) -> Result<Vec<PostWithAuthor>> {
        db::posts::list(&self.pool, &PostFilter::All, options).await
    }

    /// List posts by author username. An unknown username yields an empty
    /// list, not an error.
    pub async fn list_posts_by_author(
        &self,
        author_username: &str,
        options: ListOptions,
    ) -> Result<Vec<PostWithAuthor>> {
        db::posts::list(
            &self.pool,
            &PostFilter::AuthorUsername(author_username.to_string()),
            options,
        )
        .await
    }

    pub async fn list_posts_by_tag(
        &self,
        tag: &str,
        options: ListOptions,
    ) -> Result<Vec<PostWithAuthor>> {
        db::posts::list(&self.pool, &PostFilter::Tag(tag.to_string()), options).await
    }

    /// Absent posts are an absent result, not an error.
    pub async fn get_post_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        db::posts::find_by_id(&self.pool, post_id).await
    }

    /// Update only the supplied fields of the post matching
    /// `(post_id, user_id)`; `None` when nothing matched.
    pub async fn update_post_by_id(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        fields: &UpdatePostFields,
    ) -> Result<Option<Post>> {
        db::posts::update_scoped(&self.pool, post_id, user_id, fields).await
    }

    /// Returns how many posts were deleted (0 or 1); callers distinguish a
    /// miss from success by the count.
    pub async fn delete_post_by_id(&self, user_id: Uuid, post_id: Uuid) -> Result<u64> {
        db::posts::delete_scoped(&self.pool, post_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PostService {
        let pool = PgPool::connect_lazy("postgres://localhost/unused").expect("lazy pool");
        PostService::new(pool)
    }

    #[tokio::test]
    async fn create_without_title_fails_validation() {
        let err = service()
            .create_post(Uuid::new_v4(), None, Some("body"), &[])
            .await
            .expect_err("should fail");
        match err {
            AppError::Validation(msg) => assert!(msg.contains("title")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_with_blank_title_fails_validation() {
        let err = service()
            .create_post(Uuid::new_v4(), Some("   "), None, &[])
            .await
            .expect_err("should fail");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
