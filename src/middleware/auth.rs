/// Bearer-token authentication
///
/// Handlers that mutate posts take an [`AuthUser`] parameter; extraction
/// reads the `Authorization: Bearer <token>` header, verifies the token
/// against the configured secret and yields the caller's user id. Routes
/// without the parameter stay public.
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::security::jwt;

/// The authenticated caller's user id.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req).map(AuthUser).map_err(Into::into))
    }
}

fn extract_user(req: &HttpRequest) -> Result<Uuid, AppError> {
    let config = req
        .app_data::<web::Data<Config>>()
        .ok_or_else(|| AppError::Internal("configuration not registered".to_string()))?;

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidToken)?;

    jwt::verify_token(token, &config.jwt_secret).map_err(|err| {
        tracing::debug!("token verification failed: {}", err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn config() -> web::Data<Config> {
        web::Data::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://localhost/unused".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expires_in_secs: 3600,
        })
    }

    #[actix_web::test]
    async fn missing_header_is_rejected() {
        let req = TestRequest::default().app_data(config()).to_http_request();
        assert!(matches!(extract_user(&req), Err(AppError::InvalidToken)));
    }

    #[actix_web::test]
    async fn non_bearer_header_is_rejected() {
        let req = TestRequest::default()
            .app_data(config())
            .insert_header(("Authorization", "Basic abc"))
            .to_http_request();
        assert!(matches!(extract_user(&req), Err(AppError::InvalidToken)));
    }

    #[actix_web::test]
    async fn valid_token_yields_the_subject() {
        let user_id = Uuid::new_v4();
        let token = jwt::issue_token(user_id, "secret", 3600).expect("issue");
        let req = TestRequest::default()
            .app_data(config())
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();
        assert_eq!(extract_user(&req).expect("extract"), user_id);
    }

    #[actix_web::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let token = jwt::issue_token(Uuid::new_v4(), "other", 3600).expect("issue");
        let req = TestRequest::default()
            .app_data(config())
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();
        assert!(matches!(extract_user(&req), Err(AppError::InvalidToken)));
    }
}
