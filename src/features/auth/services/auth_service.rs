use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::password::{hash_password, verify_password};
use super::token_service::TokenService;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, LoginRequestDto, RegisterRequestDto, UserResponseDto,
};
use crate::features::auth::models::{AuthenticatedUser, NewUser, Session, User};
use crate::features::auth::repositories::{SessionRepository, UserRepository};

/// Service for account registration and session handling
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            sessions,
            tokens,
        }
    }

    /// Register a new user and log them in
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        if dto.password != dto.confirmation {
            return Err(AppError::PasswordMismatch);
        }

        if self.users.find_by_username(&dto.username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let password_hash = hash_password(&dto.password)?;
        let user = self
            .users
            .insert(NewUser {
                username: dto.username,
                email: dto.email,
                password_hash,
            })
            .await?;

        tracing::info!("User registered: {} ({})", user.username, user.id);
        self.open_session(user).await
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = self
            .users
            .find_by_username(&dto.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&dto.password, &user.password_hash)? {
            tracing::warn!("Failed login attempt for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        self.open_session(user).await
    }

    /// Ends the caller's session; its token stops working immediately
    pub async fn logout(&self, user: &AuthenticatedUser) -> Result<()> {
        self.sessions.delete(user.session_id).await?;
        tracing::info!("User {} logged out", user.user_id);
        Ok(())
    }

    pub async fn get_current_user(&self, user: &AuthenticatedUser) -> Result<UserResponseDto> {
        self.users
            .find(user.user_id)
            .await?
            .map(UserResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))
    }

    async fn open_session(&self, user: User) -> Result<AuthResponseDto> {
        self.open_session_at(user, Utc::now()).await
    }

    async fn open_session_at(&self, user: User, now: DateTime<Utc>) -> Result<AuthResponseDto> {
        let pruned = self.sessions.delete_expired(user.id, now).await?;
        if pruned > 0 {
            tracing::debug!("Pruned {} expired sessions for user {}", pruned, user.id);
        }

        let session = self
            .sessions
            .insert(Session {
                id: Uuid::now_v7(),
                user_id: user.id,
                created_at: now,
                expires_at: self.tokens.expires_at(now),
            })
            .await?;

        let access_token = self.tokens.issue(user.id, session.id, now)?;

        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.ttl_secs(),
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::JwtValidator;
    use crate::modules::persistence::InMemoryStore;
    use crate::shared::test_helpers::test_auth_config;

    fn setup() -> (AuthService, JwtValidator, InMemoryStore) {
        let store = InMemoryStore::new();
        let tokens = Arc::new(TokenService::new(&test_auth_config()));
        let users: Arc<dyn UserRepository> = Arc::new(store.clone());
        let sessions: Arc<dyn SessionRepository> = Arc::new(store.clone());

        let service = AuthService::new(users.clone(), sessions.clone(), tokens.clone());
        let validator = JwtValidator::new(tokens, sessions, users);
        (service, validator, store)
    }

    fn registration(username: &str, password: &str, confirmation: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: password.to_string(),
            confirmation: confirmation.to_string(),
        }
    }

    #[tokio::test]
    async fn password_mismatch_creates_no_user() {
        let (service, _, store) = setup();

        let result = service
            .register(registration("alice", "secret", "secreT"))
            .await;

        assert!(matches!(result, Err(AppError::PasswordMismatch)));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let (service, _, store) = setup();
        service
            .register(registration("alice", "secret", "secret"))
            .await
            .unwrap();

        let result = service
            .register(registration("alice", "other", "other"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateUsername)));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn registration_logs_the_user_in() {
        let (service, validator, _) = setup();

        let response = service
            .register(registration("alice", "secret", "secret"))
            .await
            .unwrap();
        let principal = validator
            .validate_token(&response.access_token)
            .await
            .unwrap();

        assert_eq!(principal.username, "alice");
        assert_eq!(principal.user_id, response.user.id);
        assert!(!principal.is_staff());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (service, _, _) = setup();
        service
            .register(registration("alice", "secret", "secret"))
            .await
            .unwrap();

        let result = service
            .login(LoginRequestDto {
                username: "alice".to_string(),
                password: "guess".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let (service, _, _) = setup();

        let result = service
            .login(LoginRequestDto {
                username: "nobody".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn logout_invalidates_only_that_session() {
        let (service, validator, _) = setup();
        service
            .register(registration("alice", "secret", "secret"))
            .await
            .unwrap();

        let login = |password: &str| LoginRequestDto {
            username: "alice".to_string(),
            password: password.to_string(),
        };
        let first = service.login(login("secret")).await.unwrap();
        let second = service.login(login("secret")).await.unwrap();

        let principal = validator
            .validate_token(&first.access_token)
            .await
            .unwrap();
        service.logout(&principal).await.unwrap();

        assert!(validator.validate_token(&first.access_token).await.is_err());
        assert!(validator.validate_token(&second.access_token).await.is_ok());
    }

    #[tokio::test]
    async fn new_session_prunes_expired_ones() {
        let (service, _, store) = setup();
        let first = service
            .register(registration("alice", "secret", "secret"))
            .await
            .unwrap();
        let other = service
            .register(registration("bob", "secret", "secret"))
            .await
            .unwrap();
        assert_eq!(store.session_count().await, 2);

        let alice = UserRepository::find(&store, first.user.id)
            .await
            .unwrap()
            .unwrap();
        let later = Utc::now() + chrono::Duration::hours(2);
        service.open_session_at(alice, later).await.unwrap();

        // Alice's stale session is replaced; Bob's is left for his next login
        assert_eq!(store.session_count().await, 2);
        let bob = UserRepository::find(&store, other.user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            SessionRepository::delete_expired(&store, bob.id, later)
                .await
                .unwrap(),
            1
        );
    }
}
