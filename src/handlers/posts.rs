/// Post endpoints
///
/// Failure contract: not-found and ownership misses are absent results
/// (404, or a null body on PATCH); every error the service raises is logged
/// and reported as a bare 500, validation included. This asymmetry with the
/// user endpoints is part of the API contract, not an accident.
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::posts::{ListOptions, SortBy, SortOrder, UpdatePostFields};
use crate::middleware::AuthUser;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub author: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortBy,
    #[serde(rename = "sortOrder", default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// GET /api/v1/posts
pub async fn list_posts(pool: web::Data<PgPool>, query: web::Query<ListPostsQuery>) -> HttpResponse {
    if query.author.is_some() && query.tag.is_some() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Query by author or tag, not both"
        }));
    }

    let options = ListOptions {
        sort_by: query.sort_by,
        sort_order: query.sort_order,
    };
    let service = PostService::new((**pool).clone());

    let result = if let Some(author) = &query.author {
        service.list_posts_by_author(author, options).await
    } else if let Some(tag) = &query.tag {
        service.list_posts_by_tag(tag, options).await
    } else {
        service.list_all_posts(options).await
    };

    match result {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => {
            tracing::error!("error listing posts: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/v1/posts/{id}
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> HttpResponse {
    let service = PostService::new((**pool).clone());

    match service.get_post_by_id(*post_id).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("error getting post: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: AuthUser,
    payload: web::Json<CreatePostRequest>,
) -> HttpResponse {
    let service = PostService::new((**pool).clone());
    let tags = payload.tags.clone().unwrap_or_default();

    match service
        .create_post(
            user.0,
            payload.title.as_deref(),
            payload.contents.as_deref(),
            &tags,
        )
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => {
            tracing::error!("error creating post: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// PATCH /api/v1/posts/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
    payload: web::Json<UpdatePostFields>,
) -> HttpResponse {
    let service = PostService::new((**pool).clone());

    match service.update_post_by_id(user.0, *post_id, &payload).await {
        // A miss serializes as a literal null body, not a 404.
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => {
            tracing::error!("error updating post: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
) -> HttpResponse {
    let service = PostService::new((**pool).clone());

    match service.delete_post_by_id(user.0, *post_id).await {
        Ok(0) => HttpResponse::NotFound().finish(),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => {
            tracing::error!("error deleting post: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}
