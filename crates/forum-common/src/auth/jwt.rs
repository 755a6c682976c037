//! JWT claims and validation
//!
//! Every reaction and listing call trusts the identity baked into the access
//! token: user id, email, and username. Token issuance and refresh live in a
//! separate identity service; this module only validates tokens and exposes
//! the claims.

use chrono::{Duration, Utc};
use forum_core::Actor;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Actor email, recorded in ledger audit columns
    pub email: String,
    /// Actor username
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Uuid
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid uuid
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Build the actor identity these claims assert
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid uuid
    pub fn actor(&self) -> Result<Actor, AppError> {
        Ok(Actor::new(
            self.user_id()?,
            self.email.clone(),
            self.username.clone(),
        ))
    }
}

/// JWT service for encoding and validating access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Generate an access token for an actor
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_access_token(&self, actor: &Actor) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: actor.id.to_string(),
            email: actor.email.clone(),
            username: actor.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(e.into()))
    }

    /// Validate an access token and return its claims
    ///
    /// # Errors
    /// Returns `InvalidToken` on signature/format failure and `TokenExpired`
    /// for expired tokens
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            },
        )?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor() -> Actor {
        Actor::new(Uuid::new_v4(), "user@example.com", "user")
    }

    #[test]
    fn test_token_roundtrip() {
        let service = JwtService::new("test-secret", 900);
        let actor = test_actor();

        let token = service.generate_access_token(&actor).unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), actor.id);
        assert_eq!(claims.email, actor.email);
        assert_eq!(claims.username, actor.username);
        assert!(!claims.is_expired());
        assert_eq!(claims.actor().unwrap(), actor);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = JwtService::new("secret-a", 900);
        let other = JwtService::new("secret-b", 900);

        let token = service.generate_access_token(&test_actor()).unwrap();
        assert!(matches!(
            other.validate_access_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new("test-secret", 900);
        assert!(matches!(
            service.validate_access_token("not.a.token"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_bad_subject_rejected() {
        let service = JwtService::new("test-secret", 900);
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: "user@example.com".to_string(),
            username: "user".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 900,
        };
        assert!(claims.user_id().is_err());
    }
}
