/// Error types for blog-service
///
/// Errors raised by the user endpoints are converted into JSON responses via
/// `ResponseError`. The post endpoints deliberately do not use this mapping
/// for service failures (see `handlers::posts`): they report a bare 500 for
/// anything the service raises, and represent not-found/not-owner as absent
/// results rather than errors.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing or malformed, or username already taken
    #[error("validation error: {0}")]
    Validation(String),

    /// Bad credentials at login. The message is identical whether the
    /// username or the password was wrong, so callers cannot enumerate
    /// usernames from it.
    #[error("wrong username or password")]
    InvalidCredentials,

    /// Missing, malformed or expired bearer token
    #[error("invalid token")]
    InvalidToken,

    /// Database operation failed
    #[error("database error: {0}")]
    Database(String),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Infrastructure failures are logged server-side and never leak
        // detail to the client.
        let message = match self {
            AppError::Database(msg) | AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
