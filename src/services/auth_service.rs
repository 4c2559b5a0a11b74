//! Authentication service - credential verification and token issuance.
//!
//! Each call is evaluated on its own; no session state is kept between
//! lookup, verification and issuance.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use super::token_service::{Claims, TokenIssuer};
use crate::config::LoginFailurePolicy;
use crate::domain::{AuthenticatedUser, Identity, NewIdentity, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::CredentialStore;

/// Well-formed Argon2 hash that matches no password. Verifying against it
/// costs the same as verifying against a real hash.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$Y291cnNlLWVucm9sbC0wMQ$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a bearer token.
    ///
    /// `login` is matched against both username and email.
    async fn authenticate(&self, login: &str, password: &str) -> AppResult<AuthenticatedUser>;

    /// Register a new identity
    async fn register(&self, input: NewIdentity) -> AppResult<Identity>;

    /// Look up an identity by ID
    async fn find_identity(&self, id: Uuid) -> AppResult<Identity>;

    /// Verify a bearer token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService over a credential store.
pub struct Authenticator<S: CredentialStore + ?Sized> {
    store: Arc<S>,
    issuer: TokenIssuer,
    policy: LoginFailurePolicy,
}

impl<S: CredentialStore + ?Sized> Authenticator<S> {
    pub fn new(store: Arc<S>, issuer: TokenIssuer, policy: LoginFailurePolicy) -> Self {
        Self {
            store,
            issuer,
            policy,
        }
    }

    fn unknown_login(&self, login: &str, password: &str) -> AppError {
        tracing::warn!(login, "Login attempt for unknown user");
        match self.policy {
            LoginFailurePolicy::Disclose => AppError::NotFound("User"),
            LoginFailurePolicy::Conceal => {
                // Burn the same hashing time as a real mismatch
                let _dummy = Password::from_hash(DUMMY_HASH).verify(password);
                AppError::InvalidCredentials
            }
        }
    }
}

#[async_trait]
impl<S: CredentialStore + ?Sized> AuthService for Authenticator<S> {
    async fn authenticate(&self, login: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let identity = match self.store.find_by_login(login).await? {
            Some(identity) => identity,
            None => return Err(self.unknown_login(login, password)),
        };

        if !Password::from_hash(identity.password_hash.as_str()).verify(password) {
            tracing::warn!(username = %identity.username, "Login attempt with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.issuer.issue(&identity)?;
        tracing::info!(username = %identity.username, "User authenticated");

        Ok(AuthenticatedUser {
            username: identity.username,
            email: identity.email,
            token,
        })
    }

    async fn register(&self, input: NewIdentity) -> AppResult<Identity> {
        input
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if self.store.is_taken(&input.username, &input.email).await? {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let identity = self
            .store
            .create(input.username, input.email, password_hash)
            .await?;

        tracing::info!(username = %identity.username, id = %identity.id, "Identity registered");
        Ok(identity)
    }

    async fn find_identity(&self, id: Uuid) -> AppResult<Identity> {
        self.store.find_by_id(id).await?.ok_or_not_found("User")
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.issuer.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::MockCredentialStore;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";
    const PASSWORD: &str = "CorrectHorse42";

    fn identity_with_password(password: &str) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            created_at: Utc::now(),
        }
    }

    fn authenticator(store: MockCredentialStore, policy: LoginFailurePolicy) -> Authenticator<MockCredentialStore> {
        Authenticator::new(Arc::new(store), TokenIssuer::new(SECRET).unwrap(), policy)
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let identity = identity_with_password(PASSWORD);
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_login()
            .withf(|login| login == "alice")
            .returning(move |_| Ok(Some(identity.clone())));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let user = auth.authenticate("alice", PASSWORD).await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");

        let claims = auth.verify_token(&user.token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[tokio::test]
    async fn test_authenticate_by_email() {
        let identity = identity_with_password(PASSWORD);
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_login()
            .withf(|login| login == "alice@example.com")
            .returning(move |_| Ok(Some(identity.clone())));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let user = auth.authenticate("alice@example.com", PASSWORD).await.unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_login().returning(|_| Ok(None));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let result = auth.authenticate("nobody", PASSWORD).await;

        assert!(matches!(result, Err(AppError::NotFound("User"))));
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let identity = identity_with_password(PASSWORD);
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_login()
            .returning(move |_| Ok(Some(identity.clone())));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let result = auth.authenticate("alice", "WrongPassword1").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_conceal_policy_hides_unknown_user() {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_login().returning(|_| Ok(None));

        let auth = authenticator(store, LoginFailurePolicy::Conceal);
        let result = auth.authenticate("nobody", PASSWORD).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_login()
            .returning(|_| Err(AppError::from(sea_orm::DbErr::Custom("connection reset".into()))));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let result = auth.authenticate("alice", PASSWORD).await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut store = MockCredentialStore::new();
        store.expect_is_taken().returning(|_, _| Ok(false));
        store
            .expect_create()
            .withf(|username, email, hash| {
                username == "bob"
                    && email == "bob@example.com"
                    && hash != PASSWORD
                    && Password::from_hash(hash.as_str()).verify(PASSWORD)
            })
            .times(1)
            .returning(|username, email, password_hash| {
                Ok(Identity {
                    id: Uuid::new_v4(),
                    username,
                    email,
                    password_hash,
                    created_at: Utc::now(),
                })
            });

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let identity = auth
            .register(NewIdentity {
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(identity.username, "bob");
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let mut store = MockCredentialStore::new();
        store.expect_is_taken().returning(|_, _| Ok(true));
        store.expect_create().times(0);

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let result = auth
            .register(NewIdentity {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let store = MockCredentialStore::new();

        let auth = authenticator(store, LoginFailurePolicy::Disclose);
        let result = auth
            .register(NewIdentity {
                username: "carol".to_string(),
                email: "not-an-email".to_string(),
                password: PASSWORD.to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_identity_not_found() {
        let id = Uuid::new_v4();
        let mut store = MockCredentialStore::new();
        store.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        let auth = authenticator(store, LoginFailurePolicy::Disclose);

        assert!(matches!(
            auth.find_identity(id).await,
            Err(AppError::NotFound("User"))
        ));
    }
}
