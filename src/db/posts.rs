/// Post database operations
///
/// Ownership-scoped mutation is a single conditional statement keyed on
/// `(id, author)`, so the ownership check and the write are atomic with
/// respect to concurrent mutations of the same row.
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AuthorSummary, Post, PostWithAuthor};

/// Sortable post fields. Doubles as the whitelist for the dynamically chosen
/// ORDER BY column; user input never reaches the SQL string directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "title")]
    Title,
}

impl SortBy {
    fn column(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::UpdatedAt => "updated_at",
            SortBy::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Filter applied when listing posts.
#[derive(Debug, Clone)]
pub enum PostFilter {
    All,
    /// Posts whose author has this username. An unknown username simply
    /// matches nothing.
    AuthorUsername(String),
    /// Posts whose tag array contains this exact string.
    Tag(String),
}

/// Optional fields for a partial update; `None` leaves the column untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostFields {
    pub title: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<Uuid>,
}

#[derive(sqlx::FromRow)]
struct PostAuthorRow {
    id: Uuid,
    title: String,
    author: Uuid,
    author_username: Option<String>,
    contents: Option<String>,
    tags: Vec<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(row: PostAuthorRow) -> Self {
        PostWithAuthor {
            id: row.id,
            title: row.title,
            author: AuthorSummary {
                id: row.author,
                // Unresolved authors fall back to the raw id as display name.
                username: row
                    .author_username
                    .unwrap_or_else(|| row.author.to_string()),
            },
            contents: row.contents,
            tags: row.tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub async fn insert_post(
    pool: &PgPool,
    author: Uuid,
    title: &str,
    contents: Option<&str>,
    tags: &[String],
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author, title, contents, tags)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, author, contents, tags, created_at, updated_at
        "#,
    )
    .bind(author)
    .bind(title)
    .bind(contents)
    .bind(tags)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

pub async fn find_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id, title, author, contents, tags, created_at, updated_at FROM posts WHERE id = $1",
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List posts with the author resolved via a join, filtered and sorted.
pub async fn list(
    pool: &PgPool,
    filter: &PostFilter,
    options: ListOptions,
) -> Result<Vec<PostWithAuthor>> {
    let where_clause = match filter {
        PostFilter::All => "",
        PostFilter::AuthorUsername(_) => "WHERE u.username = $1",
        PostFilter::Tag(_) => "WHERE $1 = ANY(p.tags)",
    };

    let sql = format!(
        r#"
        SELECT p.id, p.title, p.author, u.username AS author_username,
               p.contents, p.tags, p.created_at, p.updated_at
        FROM posts p
        LEFT JOIN users u ON u.id = p.author
        {where_clause}
        ORDER BY p.{column} {order}
        "#,
        where_clause = where_clause,
        column = options.sort_by.column(),
        order = options.sort_order.keyword(),
    );

    let query = sqlx::query_as::<_, PostAuthorRow>(&sql);
    let query = match filter {
        PostFilter::All => query,
        PostFilter::AuthorUsername(username) => query.bind(username.clone()),
        PostFilter::Tag(tag) => query.bind(tag.clone()),
    };

    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(PostWithAuthor::from).collect())
}

/// Apply a partial update to the post matching `(post_id, author)`.
/// Returns the updated row, or `None` when no post matched (wrong id or
/// wrong owner), in which case nothing was modified.
pub async fn update_scoped(
    pool: &PgPool,
    post_id: Uuid,
    author: Uuid,
    fields: &UpdatePostFields,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE($3, title),
            contents = COALESCE($4, contents),
            tags = COALESCE($5, tags),
            author = COALESCE($6, author),
            updated_at = now()
        WHERE id = $1 AND author = $2
        RETURNING id, title, author, contents, tags, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(author)
    .bind(fields.title.as_deref())
    .bind(fields.contents.as_deref())
    .bind(fields.tags.as_deref())
    .bind(fields.author)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete the post matching `(post_id, author)`. Returns the number of rows
/// removed (0 or 1); a miss is not an error.
pub async fn delete_scoped(pool: &PgPool, post_id: Uuid, author: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author = $2")
        .bind(post_id)
        .bind(author)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_are_created_at_desc() {
        let options = ListOptions::default();
        assert_eq!(options.sort_by, SortBy::CreatedAt);
        assert_eq!(options.sort_order, SortOrder::Desc);
    }

    #[test]
    fn sort_by_deserializes_wire_names() {
        let sort: SortBy = serde_json::from_str("\"updatedAt\"").expect("known field");
        assert_eq!(sort, SortBy::UpdatedAt);
        assert!(serde_json::from_str::<SortBy>("\"passwordHash\"").is_err());
    }

    #[test]
    fn sort_order_rejects_unknown_directions() {
        let order: SortOrder = serde_json::from_str("\"asc\"").expect("known direction");
        assert_eq!(order, SortOrder::Asc);
        assert!(serde_json::from_str::<SortOrder>("\"sideways\"").is_err());
    }

    #[test]
    fn update_fields_default_to_untouched() {
        let fields: UpdatePostFields = serde_json::from_str("{}").expect("empty patch");
        assert!(fields.title.is_none());
        assert!(fields.contents.is_none());
        assert!(fields.tags.is_none());
        assert!(fields.author.is_none());
    }
}
