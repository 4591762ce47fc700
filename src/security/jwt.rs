/// Token issuance and verification
///
/// Tokens are HS256 JWTs carrying the user id as subject. Both operations are
/// pure functions of their arguments (no global key state), so they can be
/// exercised in isolation and the signing backend swapped without touching
/// the services that call them.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed token asserting `user_id`, valid for `expires_in_secs`.
pub fn issue_token(user_id: Uuid, secret: &str, expires_in_secs: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token generation failed: {}", e)))
}

/// Verify a token's signature and expiry, returning the user id it asserts.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AppError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "secret", 3600).expect("should issue");
        let verified = verify_token(&token, "secret").expect("should verify");
        assert_eq!(verified, user_id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "secret", 3600).expect("should issue");
        assert!(matches!(
            verify_token(&token, "other"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Default Validation applies 60s leeway, so back-date well past it.
        let token = issue_token(Uuid::new_v4(), "secret", -120).expect("should issue");
        assert!(matches!(
            verify_token(&token, "secret"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not-a-jwt", "secret"),
            Err(AppError::InvalidToken)
        ));
    }
}
