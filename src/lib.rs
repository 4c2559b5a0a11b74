//! Course enrollment backend
//!
//! Persistence and authentication core for a course-enrollment service:
//! a generic repository over the catalog (categories, courses, instructors,
//! enrollments) and a credential check that issues short-lived bearer tokens.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Catalog entities, identities and password hashing
//! - **services**: Authentication and token issuance
//! - **infra**: Database, migrations and repositories
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Add a category and a course in it
//! cargo run -- catalog add-category --name Programming
//! cargo run -- catalog add-course --title "Intro to Rust" --category-id 1
//!
//! # Register and log in
//! cargo run -- users create --username alice --email alice@example.com --password 'CorrectHorse42'
//! cargo run -- login --username alice --password 'CorrectHorse42'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Config, LoginFailurePolicy};
pub use domain::{Category, Course, Enrollment, Identity, Instructor, Password};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Repository};
