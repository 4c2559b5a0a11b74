//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod catalog;
pub mod login;
pub mod migrate;
pub mod token;
pub mod users;

use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Connect, apply pending migrations and build the service container.
async fn connect_services(config: &Config) -> AppResult<Services> {
    let db = Database::connect(&config.database_url).await?;
    Services::from_connection(db.get_connection(), config)
}

/// Print a value to stdout as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
