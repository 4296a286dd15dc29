use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::SessionClaims;

/// Signs and verifies HS256 session tokens
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    ttl: chrono::Duration,
    leeway: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: chrono::Duration::seconds(config.session_ttl.as_secs() as i64),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    /// Session lifetime in seconds, as reported to clients
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// When a session opened at `now` stops being valid
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.ttl
    }

    pub fn issue(&self, user_id: Uuid, session_id: Uuid, now: DateTime<Utc>) -> Result<String> {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            sid: session_id.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp() as u64,
            exp: self.expires_at(now).timestamp() as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign session token: {:?}", e);
            AppError::Internal("Failed to sign session token".to_string())
        })
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        decode::<SessionClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Auth(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(secret: &str, issuer: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            issuer: issuer.to_string(),
            audience: "auctions-web".to_string(),
            session_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    #[test]
    fn issued_token_carries_user_and_session() {
        let tokens = TokenService::new(&config("0123456789abcdef0123456789abcdef", "auctions"));
        let user_id = Uuid::now_v7();
        let session_id = Uuid::now_v7();

        let token = tokens.issue(user_id, session_id, Utc::now()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.sid, session_id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = TokenService::new(&config("0123456789abcdef0123456789abcdef", "auctions"));
        let verifier = TokenService::new(&config("fedcba9876543210fedcba9876543210", "auctions"));

        let token = issuer.issue(Uuid::now_v7(), Uuid::now_v7(), Utc::now()).unwrap();

        assert!(matches!(verifier.verify(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn rejects_foreign_issuer() {
        let secret = "0123456789abcdef0123456789abcdef";
        let foreign = TokenService::new(&config(secret, "someone-else"));
        let ours = TokenService::new(&config(secret, "auctions"));

        let token = foreign.issue(Uuid::now_v7(), Uuid::now_v7(), Utc::now()).unwrap();

        assert!(ours.verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new(&config("0123456789abcdef0123456789abcdef", "auctions"));
        let issued_at = Utc::now() - chrono::Duration::hours(2);

        let token = tokens.issue(Uuid::now_v7(), Uuid::now_v7(), issued_at).unwrap();

        assert!(tokens.verify(&token).is_err());
    }
}
