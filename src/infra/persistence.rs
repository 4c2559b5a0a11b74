//! Persistence container.
//!
//! Builds every repository from one pooled connection and hands them out as
//! trait objects. Repositories keep no per-request state, so the same
//! instances are shared by all callers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CategoryRepository, CourseRepository, CredentialStore, EnrollmentRepository, IdentityStore,
    InstructorRepository, Repository,
};
use crate::domain::{Category, Course, Enrollment, Instructor};

/// Concrete set of repositories backed by SeaORM
pub struct Persistence {
    categories: Arc<CategoryRepository>,
    courses: Arc<CourseRepository>,
    instructors: Arc<InstructorRepository>,
    enrollments: Arc<EnrollmentRepository>,
    credentials: Arc<IdentityStore>,
}

impl Persistence {
    /// Create all repositories over the given connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            categories: Arc::new(CategoryRepository::new(db.clone())),
            courses: Arc::new(CourseRepository::new(db.clone())),
            instructors: Arc::new(InstructorRepository::new(db.clone())),
            enrollments: Arc::new(EnrollmentRepository::new(db.clone())),
            credentials: Arc::new(IdentityStore::new(db)),
        }
    }

    pub fn categories(&self) -> Arc<dyn Repository<Category>> {
        self.categories.clone()
    }

    pub fn courses(&self) -> Arc<dyn Repository<Course>> {
        self.courses.clone()
    }

    pub fn instructors(&self) -> Arc<dyn Repository<Instructor>> {
        self.instructors.clone()
    }

    pub fn enrollments(&self) -> Arc<dyn Repository<Enrollment>> {
        self.enrollments.clone()
    }

    pub fn credentials(&self) -> Arc<dyn CredentialStore> {
        self.credentials.clone()
    }
}
