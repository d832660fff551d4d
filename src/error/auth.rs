use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// The two cases share one message so a caller cannot probe which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has not completed OTP verification.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account has not been verified")]
    AccountNotVerified,

    /// No bearer token was present on a request to a protected endpoint.
    #[error("Missing authorization token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token was valid but its subject no longer exists.
    ///
    /// # Fields
    /// - Email address from the token subject
    #[error("User {0} no longer exists")]
    UserNotInDatabase(String),

    /// The submitted OTP does not match the latest code issued.
    ///
    /// Results in a 409 Conflict response.
    #[error("Invalid OTP code")]
    OtpInvalid,

    /// The OTP matched but its expiry window has passed.
    ///
    /// Results in a 403 Forbidden response.
    #[error("OTP code has expired")]
    OtpExpired,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` / `MissingToken` / `InvalidToken` / `UserNotInDatabase` map to 401
/// - `AccountNotVerified` and `OtpExpired` map to 403
/// - `OtpInvalid` maps to 409
///
/// `UserNotInDatabase` hides the stale subject behind the generic token message
/// to avoid leaking which accounts exist.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            Self::AccountNotVerified => (
                StatusCode::FORBIDDEN,
                "Account has not been verified".to_string(),
            ),
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing authorization token".to_string(),
            ),
            Self::InvalidToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            Self::OtpInvalid => (StatusCode::CONFLICT, "Invalid OTP code".to_string()),
            Self::OtpExpired => (StatusCode::FORBIDDEN, "OTP code has expired".to_string()),
        };

        (status, Json(ApiResponse::failure(message, None))).into_response()
    }
}
