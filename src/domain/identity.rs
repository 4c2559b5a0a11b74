//! Identity domain entity and authentication data transfer objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A user identity held by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewIdentity {
    #[validate(length(min = 3, max = 64, message = "Username must be 3 to 64 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Successful login result: the identity's public fields plus a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(username: &str, email: &str, password: &str) -> NewIdentity {
        NewIdentity {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration_input() {
        assert!(input("alice", "alice@example.com", "Password123").validate().is_ok());
    }

    #[test]
    fn test_invalid_registration_input() {
        assert!(input("al", "alice@example.com", "Password123").validate().is_err());
        assert!(input("alice", "not-an-email", "Password123").validate().is_err());
        assert!(input("alice", "alice@example.com", "short").validate().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let identity = Identity {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&identity).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("alice@example.com"));
    }
}
