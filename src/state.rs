//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::service::{email::EmailService, jwt::JwtProvider};

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, as every
/// field is a pool handle or a small value type) for each incoming request
/// via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client used for the external province feed.
    pub http_client: reqwest::Client,

    /// Issues and validates bearer tokens.
    pub jwt: JwtProvider,

    /// Sends OTP emails over SMTP.
    pub mailer: EmailService,

    /// URL of the external province feed consumed by the import endpoint.
    pub province_api_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        jwt: JwtProvider,
        mailer: EmailService,
        province_api_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt,
            mailer,
            province_api_url,
        }
    }
}
