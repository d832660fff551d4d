//! Stateless bearer token issuance and validation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::auth::AuthError;

/// Claims carried by every issued token. The subject is the user's email.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and validates HS256 tokens with a shared secret.
///
/// Cheap to clone; lives in [`crate::state::AppState`] so handlers and the
/// auth guard share one configuration.
#[derive(Clone)]
pub struct JwtProvider {
    secret: String,
    expire_secs: i64,
}

impl JwtProvider {
    pub fn new(secret: impl Into<String>, expire_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expire_secs,
        }
    }

    /// Issues a token with the email as subject.
    pub fn generate(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.expire_secs,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Validates signature and expiry, collapsing every failure mode into
    /// `AuthError::InvalidToken` so responses never reveal why a token was
    /// rejected.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}
