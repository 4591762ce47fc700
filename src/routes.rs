/// Route table for the REST surface
use actix_web::web;

use crate::error::AppError;
use crate::handlers;

/// Malformed path ids (non-UUID `{id}` segments) are a validation failure,
/// not a missing resource.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_, _| AppError::Validation("malformed id".to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/posts", web::get().to(handlers::posts::list_posts))
            .route("/posts", web::post().to(handlers::posts::create_post))
            .route("/posts/{id}", web::get().to(handlers::posts::get_post))
            .route("/posts/{id}", web::patch().to(handlers::posts::update_post))
            .route("/posts/{id}", web::delete().to(handlers::posts::delete_post))
            .route("/users", web::post().to(handlers::users::register))
            .route("/users/login", web::post().to(handlers::users::login))
            .route("/users/{id}", web::get().to(handlers::users::get_user)),
    );
}
