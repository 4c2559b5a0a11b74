//! Token issuer - signs and validates bearer tokens.
//!
//! Tokens are HS256 JWTs valid for `TOKEN_TTL_MINUTES` from issuance. There
//! is no refresh: once a token expires the caller authenticates again.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, MIN_JWT_SECRET_LENGTH, TOKEN_TTL_MINUTES};
use crate::domain::Identity;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated identity
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates tokens with a symmetric key supplied at construction.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("key", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer from raw key bytes.
    ///
    /// # Errors
    /// Returns a configuration error if the key is shorter than
    /// `MIN_JWT_SECRET_LENGTH` bytes.
    pub fn new(secret: &[u8]) -> AppResult<Self> {
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "signing key must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::minutes(TOKEN_TTL_MINUTES),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.jwt_secret_bytes())
    }

    /// Issue a token for a verified identity.
    pub fn issue(&self, identity: &Identity) -> AppResult<String> {
        self.issue_at(identity, Utc::now())
    }

    pub(crate) fn issue_at(&self, identity: &Identity, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            sub: identity.username.clone(),
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        tracing::debug!(subject = %claims.sub, exp = claims.exp, "Issued token");

        Ok(token)
    }

    /// Validate signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::ErrorKind;
    use uuid::Uuid;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let token = issuer.issue(&identity()).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_token_uses_hs256() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let token = issuer.issue(&identity()).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let token = issuer
            .issue_at(&identity(), Utc::now() - Duration::hours(2))
            .unwrap();

        match issuer.verify(&token) {
            Err(AppError::Jwt(e)) => assert_eq!(*e.kind(), ErrorKind::ExpiredSignature),
            other => panic!("expected expired signature, got {:?}", other),
        }
    }

    #[test]
    fn test_token_from_other_key_rejected() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let other = TokenIssuer::new(b"another-secret-key-that-is-32-bytes-long").unwrap();
        let token = other.issue(&identity()).unwrap();

        assert!(matches!(issuer.verify(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_short_key_is_configuration_error() {
        assert!(matches!(
            TokenIssuer::new(b"short"),
            Err(AppError::Configuration(_))
        ));
    }
}
