//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Catalog repositories and the credential store
//! - Persistence container wiring them to one connection

pub mod db;
mod persistence;
pub mod repositories;

pub use db::{Database, Migrator};
pub use persistence::Persistence;
pub use repositories::{
    CategoryRepository, CourseRepository, CredentialStore, EntityStore, EnrollmentRepository,
    IdentityStore, InstructorRepository, Repository, Resource,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCredentialStore;
