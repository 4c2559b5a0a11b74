//! Credential store: identity lookup and registration.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use super::entities::identity::{self, ActiveModel, Entity as IdentityEntity};
use crate::domain::Identity;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the identity whose username or email equals `login`
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Identity>>;

    /// Find identity by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>>;

    /// Whether either value is already used as a username or an email
    async fn is_taken(&self, username: &str, email: &str) -> AppResult<bool>;

    /// Store a new identity
    async fn create(&self, username: String, email: String, password_hash: String) -> AppResult<Identity>;
}

/// Concrete implementation of CredentialStore
pub struct IdentityStore {
    db: DatabaseConnection,
}

impl IdentityStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for IdentityStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Identity>> {
        let result = IdentityEntity::find()
            .filter(
                Condition::any()
                    .add(identity::Column::Username.eq(login))
                    .add(identity::Column::Email.eq(login)),
            )
            .one(&self.db)
            .await?;

        Ok(result.map(Identity::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        let result = IdentityEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(Identity::from))
    }

    async fn is_taken(&self, username: &str, email: &str) -> AppResult<bool> {
        // Logins match either column, so each value must be free in both
        let existing = IdentityEntity::find()
            .filter(
                Condition::any()
                    .add(identity::Column::Username.is_in([username, email]))
                    .add(identity::Column::Email.is_in([username, email])),
            )
            .one(&self.db)
            .await?;

        Ok(existing.is_some())
    }

    async fn create(&self, username: String, email: String, password_hash: String) -> AppResult<Identity> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(|err| match err.sql_err() {
            // Lost a race with a concurrent registration
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
            _ => AppError::from(err),
        })?;

        Ok(Identity::from(model))
    }
}
