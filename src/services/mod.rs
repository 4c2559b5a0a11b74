//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod token_service;

pub use auth_service::{AuthService, Authenticator};
pub use container::Services;
pub use token_service::{Claims, TokenIssuer};
