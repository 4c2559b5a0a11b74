//! Domain layer - Core business entities and logic
//!
//! Catalog entities (categories, courses, instructors, enrollments) and the
//! identity used for authentication. No infrastructure types leak in here;
//! SeaORM models convert into these in `infra::repositories::entities`.

pub mod category;
pub mod course;
pub mod enrollment;
pub mod identity;
pub mod instructor;
pub mod password;

pub use category::Category;
pub use course::Course;
pub use enrollment::Enrollment;
pub use identity::{AuthenticatedUser, Identity, NewIdentity};
pub use instructor::Instructor;
pub use password::Password;
