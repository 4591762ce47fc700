/// User endpoints: registration, login, display-name lookup
///
/// Unlike the post handlers, these propagate `AppError` so validation and
/// credential failures surface with their own statuses and JSON bodies.
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::models::UserResponse;
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub username: String,
}

fn user_service(pool: &web::Data<PgPool>, config: &web::Data<Config>) -> UserService {
    UserService::new(
        pool.get_ref().clone(),
        config.jwt_secret.clone(),
        config.jwt_expires_in_secs,
    )
}

/// POST /api/v1/users
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service(&pool, &config)
        .register(payload.username.as_deref(), payload.password.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /api/v1/users/login
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // A missing field behaves like a wrong credential; the response stays
    // identical across all failure causes.
    let username = payload.username.as_deref().unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    let token = user_service(&pool, &config).login(username, password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user_id: web::Path<Uuid>,
) -> HttpResponse {
    let username = user_service(&pool, &config).get_user_info(*user_id).await;
    HttpResponse::Ok().json(UserInfoResponse { username })
}
