use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::jwt::JwtProvider,
};

/// Request guard for endpoints that require a logged-in user.
///
/// Handlers call `require` with the request headers; a valid bearer token
/// resolves to the full user row so handlers never re-fetch it.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtProvider,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtProvider) -> Self {
        Self { db, jwt }
    }

    /// Authenticates the request from its `Authorization: Bearer` header.
    ///
    /// The token subject must still resolve to a user row; accounts deleted
    /// after the token was issued are rejected.
    pub async fn require(&self, headers: &HeaderMap) -> Result<entity::user::Model, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.jwt.validate(&token)?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}
