/// Password hashing and verification using bcrypt
///
/// A fixed cost of 10 with a random per-password salt. Hashing and
/// verification are CPU-bound, so the async wrappers run them on the
/// blocking pool to keep request workers free.
use crate::error::{AppError, Result};

const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))
}

pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))?
}

pub async fn verify_password_blocking(password: String, password_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("p").expect("should hash");
        assert!(verify_password("p", &hash).expect("should verify"));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("p").expect("should hash");
        assert!(!verify_password("q", &hash).expect("verification should succeed"));
    }

    #[test]
    fn hash_never_contains_plaintext() {
        let hash = hash_password("hunter2").expect("should hash");
        assert!(!hash.contains("hunter2"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let hash1 = hash_password("p").expect("should hash");
        let hash2 = hash_password("p").expect("should hash");
        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }

    #[tokio::test]
    async fn blocking_wrappers_round_trip() {
        let hash = hash_password_blocking("p".to_string())
            .await
            .expect("should hash");
        assert!(verify_password_blocking("p".to_string(), hash)
            .await
            .expect("should verify"));
    }
}
