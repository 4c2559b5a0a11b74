//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `catalog` - Categories, courses, instructors and enrollments
//! - `users` - Identity registration and lookup
//! - `login` - Authenticate and print a bearer token
//! - `token` - Inspect bearer tokens

pub mod args;

pub use args::{Cli, Commands};
