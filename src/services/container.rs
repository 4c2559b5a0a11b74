//! Service Container - Centralized access to repositories and services.
//!
//! Built once per process from a database connection and the loaded
//! configuration; every part is shared through `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, TokenIssuer};
use crate::config::Config;
use crate::domain::{Category, Course, Enrollment, Instructor};
use crate::errors::AppResult;
use crate::infra::{Persistence, Repository};

/// Concrete service container
pub struct Services {
    persistence: Persistence,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create service container from database connection and config.
    ///
    /// # Errors
    /// Returns a configuration error if the signing key is invalid.
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> AppResult<Self> {
        let persistence = Persistence::new(db);
        let issuer = TokenIssuer::from_config(config)?;
        let auth_service = Arc::new(Authenticator::new(
            persistence.credentials(),
            issuer,
            config.login_failure_policy,
        ));

        Ok(Self {
            persistence,
            auth_service,
        })
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn categories(&self) -> Arc<dyn Repository<Category>> {
        self.persistence.categories()
    }

    pub fn courses(&self) -> Arc<dyn Repository<Course>> {
        self.persistence.courses()
    }

    pub fn instructors(&self) -> Arc<dyn Repository<Instructor>> {
        self.persistence.instructors()
    }

    pub fn enrollments(&self) -> Arc<dyn Repository<Enrollment>> {
        self.persistence.enrollments()
    }
}
