//! Repository layer - Data access abstraction
//!
//! One generic [`Repository`] contract backs all four catalog entities; the
//! credential store has its own narrower trait.

mod base;
mod category_repository;
mod course_repository;
mod credential_repository;
pub(crate) mod entities;
mod enrollment_repository;
mod instructor_repository;

pub use base::{EntityStore, Repository, Resource};
pub use category_repository::CategoryRepository;
pub use course_repository::CourseRepository;
pub use credential_repository::{CredentialStore, IdentityStore};
pub use enrollment_repository::EnrollmentRepository;
pub use instructor_repository::InstructorRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use credential_repository::MockCredentialStore;
