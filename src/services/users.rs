/// User service - registration, authentication and display-name lookup
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::{jwt, password};

const MIN_USERNAME_LEN: usize = 3;

pub struct UserService {
    pool: PgPool,
    jwt_secret: String,
    jwt_expires_in_secs: i64,
}

impl UserService {
    pub fn new(pool: PgPool, jwt_secret: String, jwt_expires_in_secs: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            jwt_expires_in_secs,
        }
    }

    /// Register a new user, storing only a bcrypt hash of the password.
    pub async fn register(&self, username: Option<&str>, password: Option<&str>) -> Result<User> {
        let username = match username.map(str::trim) {
            None | Some("") => {
                return Err(AppError::Validation("username is required".to_string()))
            }
            Some(name) => name,
        };
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(AppError::Validation(format!(
                "username must be at least {} characters",
                MIN_USERNAME_LEN
            )));
        }
        let password = match password {
            None | Some("") => {
                return Err(AppError::Validation("password is required".to_string()))
            }
            Some(p) => p,
        };

        let password_hash = password::hash_password_blocking(password.to_string()).await?;
        let user = db::users::insert_user(&self.pool, username, &password_hash).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate a user and issue a signed token.
    ///
    /// An unknown username and a wrong password fail with the same error so
    /// the response cannot be used to enumerate usernames.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let user = db::users::find_by_username(&self.pool, username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid =
            password::verify_password_blocking(password.to_string(), user.password_hash.clone())
                .await?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = jwt::issue_token(user.id, &self.jwt_secret, self.jwt_expires_in_secs)?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(token)
    }

    /// Best-effort username lookup for display purposes. A missing user or a
    /// failed lookup yields the id itself as a fallback display value.
    pub async fn get_user_info(&self, user_id: Uuid) -> String {
        match db::users::find_by_id(&self.pool, user_id).await {
            Ok(Some(user)) => user.username,
            Ok(None) => user_id.to_string(),
            Err(err) => {
                tracing::warn!(%user_id, "user lookup failed: {}", err);
                user_id.to_string()
            }
        }
    }
}
