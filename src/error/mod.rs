//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ApiResponse,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when the province import API fails.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Token signing error from jsonwebtoken.
    ///
    /// Only raised while issuing tokens; validation failures map to
    /// `AuthError::InvalidToken` instead. Results in 500 Internal Server Error.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error from bcrypt.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Email message construction error from lettre.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    EmailErr(#[from] lettre::error::Error),

    /// SMTP transport error from lettre.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    SmtpErr(#[from] lettre::transport::smtp::Error),

    /// Request validation failure with per-field messages.
    ///
    /// Results in 400 Bad Request with the field map in the response body,
    /// mirroring the shape of a registration form so clients can attach
    /// each message to its input.
    ///
    /// # Fields
    /// - Map of field name to validation message
    #[error("Invalid request data")]
    Validation(HashMap<String, String>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique value conflict with per-field messages.
    ///
    /// Results in 409 Conflict with the field map in the response body so
    /// clients can attach each message to its input, like `Validation`.
    ///
    /// # Fields
    /// - Map of field name to conflict message
    #[error("Resource already exists")]
    Conflict(HashMap<String, String>),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a validation error carrying a single field message.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = HashMap::new();
        errors.insert(field.to_string(), message.into());
        Self::Validation(errors)
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and a response body
/// in the standard envelope. Authentication errors delegate to their own response
/// handling, while other errors use standard mappings. Internal errors are logged
/// with full details but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ReqwestErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(
                    "Invalid request data".to_string(),
                    Some(errors),
                )),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::failure(msg, None))).into_response()
            }
            Self::Conflict(errors) => (
                StatusCode::CONFLICT,
                Json(ApiResponse::failure(
                    "Resource already exists".to_string(),
                    Some(errors),
                )),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(msg, None)),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::failure("Internal server error".to_string(), None)),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure("Internal server error".to_string(), None)),
        )
            .into_response()
    }
}
