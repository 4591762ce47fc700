/// Blog Service Library
///
/// Minimal blog backend: user registration and login plus CRUD over posts,
/// where mutation is scoped to the post's author.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Persisted entities and response shapes
/// - `services`: Business logic layer
/// - `db`: Database access layer
/// - `security`: Password hashing and token issuance/verification
/// - `middleware`: Bearer-token authentication extractor
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
