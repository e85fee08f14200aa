//! Registration, login and session token service.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{AuthUser, Claims, NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::username::validate_username;

/// A freshly signed session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for account registration and bearer token authentication.
///
/// Passwords are stored as Argon2id hashes. Session tokens are HS256 JWTs
/// signed with a per-deployment secret and expire after `token_ttl`.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user store
    /// - `signing_secret` - HMAC key for signing and verifying tokens
    /// - `token_ttl` - lifetime of issued tokens
    pub fn new(repository: Arc<R>, signing_secret: &str, token_ttl: Duration) -> Self {
        Self {
            repository,
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            token_ttl,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUsername`] if the username breaks the format rules
    /// - [`AppError::UsernameTaken`] if the username is already registered
    /// - [`AppError::Internal`] if hashing fails
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<String>,
    ) -> Result<User, AppError> {
        validate_username(username)?;

        // Skips the hashing cost for the common duplicate case; `create` still
        // enforces uniqueness atomically.
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AppError::UsernameTaken);
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::internal("Password hashing task failed", json!({"reason": e.to_string()})))?
            .map_err(|e| AppError::internal("Failed to hash password", json!({"reason": e.to_string()})))?;

        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
                email,
            })
            .await?;

        tracing::info!(username = %user.username, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if the user does not exist or the
    /// password does not match.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            tracing::warn!(username, "Login failed: unknown user");
            return Err(AppError::InvalidCredentials);
        };

        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::internal("Password verification task failed", json!({"reason": e.to_string()})))?
            .map_err(|e| AppError::internal("Stored password hash is malformed", json!({"reason": e.to_string()})))?;

        if !matches {
            tracing::warn!(username, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let issued = self.issue_token(&user.username)?;
        tracing::info!(username, expires_at = %issued.expires_at, "Token issued");

        Ok(issued)
    }

    /// Signs a token for `username` valid for the configured TTL.
    pub fn issue_token(&self, username: &str) -> Result<IssuedToken, AppError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.token_ttl;

        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal("Failed to sign token", json!({"reason": e.to_string()})))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies a raw bearer token and returns the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredential`] if the signature does not verify,
    /// the token is malformed, or it has expired.
    pub fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| AuthUser::from(data.claims))
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::InvalidCredential
            })
    }

    pub async fn count_users(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn test_secret() -> &'static str {
        "test-signing-secret"
    }

    fn service(mock_repo: MockUserRepository) -> AuthService<MockUserRepository> {
        AuthService::new(Arc::new(mock_repo), test_secret(), Duration::hours(1))
    }

    fn stored_user(username: &str, password: &str) -> User {
        User {
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
            email: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new| {
                new.username == "alice"
                    && new.password_hash != "pw1"
                    && verify_password("pw1", &new.password_hash).unwrap()
            })
            .times(1)
            .returning(|new| {
                Ok(User {
                    username: new.username,
                    password_hash: new.password_hash,
                    email: new.email,
                    created_at: Utc::now(),
                })
            });

        let user = service(mock_repo)
            .register("alice", "pw1", None)
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_username() {
        let mock_repo = MockUserRepository::new();

        let result = service(mock_repo).register("admin", "pw1", None).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUsername(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|name| Ok(Some(stored_user(name, "pw1"))));

        let result = service(mock_repo).register("alice", "pw2", None).await;

        assert!(matches!(result.unwrap_err(), AppError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_login_success_token_round_trips() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|name| Ok(Some(stored_user(name, "pw1"))));

        let service = service(mock_repo);

        let issued = service.login("alice", "pw1").await.unwrap();
        assert!(issued.expires_at > Utc::now());

        let identity = service.authenticate(&issued.token).unwrap();
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|name| Ok(Some(stored_user(name, "pw1"))));

        let result = service(mock_repo).login("alice", "nope").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).login("ghost", "pw").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_rejects_other_secret() {
        let issuer = AuthService::new(
            Arc::new(MockUserRepository::new()),
            "secret-a",
            Duration::hours(1),
        );
        let verifier = AuthService::new(
            Arc::new(MockUserRepository::new()),
            "secret-b",
            Duration::hours(1),
        );

        let issued = issuer.issue_token("alice").unwrap();

        assert!(matches!(
            verifier.authenticate(&issued.token),
            Err(AppError::InvalidCredential)
        ));
    }

    #[test]
    fn test_authenticate_rejects_expired_token() {
        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            test_secret(),
            Duration::hours(-2),
        );

        let issued = service.issue_token("alice").unwrap();

        assert!(matches!(
            service.authenticate(&issued.token),
            Err(AppError::InvalidCredential)
        ));
    }

    #[test]
    fn test_authenticate_rejects_garbage() {
        let service = service(MockUserRepository::new());

        assert!(matches!(
            service.authenticate("not-a-jwt"),
            Err(AppError::InvalidCredential)
        ));
    }

    #[test]
    fn test_authenticate_rejects_tampered_signature() {
        let service = service(MockUserRepository::new());
        let alice = service.issue_token("alice").unwrap().token;
        let mallory = service.issue_token("mallory").unwrap().token;

        // mallory's header and payload under alice's signature
        let (mallory_signed, _) = mallory.rsplit_once('.').unwrap();
        let (_, alice_signature) = alice.rsplit_once('.').unwrap();
        let tampered = format!("{mallory_signed}.{alice_signature}");

        assert!(matches!(
            service.authenticate(&tampered),
            Err(AppError::InvalidCredential)
        ));
    }
}
