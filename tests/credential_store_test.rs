//! Credential store and authentication tests against an in-memory SQLite store.

use std::sync::Arc;

use uuid::Uuid;

use course_enrollment::config::LoginFailurePolicy;
use course_enrollment::domain::{Identity, NewIdentity, Password};
use course_enrollment::errors::{AppError, AppResult};
use course_enrollment::infra::{CredentialStore, Database, Persistence};
use course_enrollment::services::{AuthService, Authenticator, TokenIssuer};

const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

async fn setup() -> Persistence {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database should migrate");
    Persistence::new(db.get_connection())
}

fn authenticator(store: &Persistence, policy: LoginFailurePolicy) -> Authenticator<dyn CredentialStore> {
    Authenticator::new(store.credentials(), TokenIssuer::new(SECRET).unwrap(), policy)
}

fn new_identity(username: &str, email: &str, password: &str) -> NewIdentity {
    NewIdentity {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

async fn create(store: &Arc<dyn CredentialStore>, username: &str, email: &str) -> AppResult<Identity> {
    store
        .create(
            username.to_string(),
            email.to_string(),
            Password::new("CorrectHorse42").unwrap().into_string(),
        )
        .await
}

#[tokio::test]
async fn test_find_by_login_matches_username_or_email() {
    let persistence = setup().await;
    let store = persistence.credentials();
    let alice = create(&store, "alice", "alice@example.com").await.unwrap();

    let by_username = store.find_by_login("alice").await.unwrap();
    let by_email = store.find_by_login("alice@example.com").await.unwrap();

    assert_eq!(by_username.map(|i| i.id), Some(alice.id));
    assert_eq!(by_email.map(|i| i.id), Some(alice.id));
    assert!(store.find_by_login("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let persistence = setup().await;
    let store = persistence.credentials();
    let alice = create(&store, "alice", "alice@example.com").await.unwrap();

    let found = store.find_by_id(alice.id).await.unwrap().unwrap();

    assert_eq!(found.username, "alice");
    assert_eq!(found.password_hash, alice.password_hash);
    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let persistence = setup().await;
    let store = persistence.credentials();
    create(&store, "alice", "alice@example.com").await.unwrap();

    let same_username = create(&store, "alice", "other@example.com").await;
    let same_email = create(&store, "alicia", "alice@example.com").await;

    assert!(matches!(same_username, Err(AppError::Conflict(_))));
    assert!(matches!(same_email, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_is_taken_checks_both_columns() {
    let persistence = setup().await;
    let store = persistence.credentials();
    create(&store, "bob@example.com", "mallory@example.com").await.unwrap();

    assert!(store.is_taken("bob@example.com", "new@example.com").await.unwrap());
    assert!(store.is_taken("bob", "bob@example.com").await.unwrap());
    assert!(store.is_taken("mallory@example.com", "new@example.com").await.unwrap());
    assert!(!store.is_taken("bob", "new@example.com").await.unwrap());
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let persistence = setup().await;
    let auth = authenticator(&persistence, LoginFailurePolicy::Disclose);

    let identity = auth
        .register(new_identity("alice", "alice@example.com", "CorrectHorse42"))
        .await
        .unwrap();
    assert_ne!(identity.password_hash, "CorrectHorse42");

    for login in ["alice", "alice@example.com"] {
        let user = auth.authenticate(login, "CorrectHorse42").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");

        let claims = auth.verify_token(&user.token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    assert_eq!(auth.find_identity(identity.id).await.unwrap().username, "alice");
}

#[tokio::test]
async fn test_authentication_failures() {
    let persistence = setup().await;
    let auth = authenticator(&persistence, LoginFailurePolicy::Disclose);
    auth.register(new_identity("alice", "alice@example.com", "CorrectHorse42"))
        .await
        .unwrap();

    assert!(matches!(
        auth.authenticate("alice", "WrongHorse42").await,
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        auth.authenticate("nobody", "CorrectHorse42").await,
        Err(AppError::NotFound("User"))
    ));
    assert!(matches!(
        auth.find_identity(Uuid::new_v4()).await,
        Err(AppError::NotFound("User"))
    ));
}

#[tokio::test]
async fn test_conceal_policy_with_real_store() {
    let persistence = setup().await;
    let auth = authenticator(&persistence, LoginFailurePolicy::Conceal);

    assert!(matches!(
        auth.authenticate("nobody", "CorrectHorse42").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_email_login_cannot_be_shadowed_by_username() {
    let persistence = setup().await;
    let auth = authenticator(&persistence, LoginFailurePolicy::Disclose);
    auth.register(new_identity("bob@example.com", "mallory@example.com", "MalloryPass1"))
        .await
        .unwrap();

    // Email already used as someone's username
    assert!(matches!(
        auth.register(new_identity("bob", "bob@example.com", "BobPassword1")).await,
        Err(AppError::Conflict(_))
    ));
    // Username already used as someone's email
    assert!(matches!(
        auth.register(new_identity("mallory@example.com", "eve@example.com", "EvePassword1"))
            .await,
        Err(AppError::Conflict(_))
    ));

    let user = auth
        .authenticate("bob@example.com", "MalloryPass1")
        .await
        .unwrap();
    assert_eq!(user.email, "mallory@example.com");
}
