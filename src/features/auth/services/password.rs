use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::core::error::{AppError, Result};

pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            AppError::Internal("Failed to hash password".to_string())
        })
}

/// A stored hash that cannot be parsed is an internal error, not a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("Failed to parse password hash: {}", e);
        AppError::Internal("Stored password hash is malformed".to_string())
    })?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("correct-horse").unwrap();
        let second = hash_password("correct-horse").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("correct-horse", &first).unwrap());
        assert!(verify_password("correct-horse", &second).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse").unwrap();
        assert!(!verify_password("battery-staple", &hash).unwrap());
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
