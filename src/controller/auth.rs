use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::ApiResponse,
        auth::{ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto, VerifyAccountDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Creates an unverified account and emails a one-time verification code.
/// Validation problems are reported per field in a single response.
///
/// # Returns
/// - `201 Created` - Account created, OTP emailed
/// - `400 Bad Request` - Per-field validation errors
/// - `500 Internal Server Error` - Database or mail error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created, verification code emailed"),
        (status = 400, description = "Per-field validation errors"),
        (status = 409, description = "Email or phone number already registered"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, &state.mailer);

    let user = service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Account created. Check your email for the verification code.",
            user,
        )),
    ))
}

/// Log in with email and password.
///
/// Issues a bearer token on success. Unknown email and wrong password are
/// indistinguishable from the response.
///
/// # Returns
/// - `200 OK` - Token and user profile
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - Account not yet verified
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account not verified"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, &state.mailer);

    let response = service.login(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Logged in", response)),
    ))
}

/// Verify a freshly registered account with the emailed OTP.
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-otp",
    tag = AUTH_TAG,
    request_body = VerifyAccountDto,
    responses(
        (status = 200, description = "Account verified"),
        (status = 403, description = "OTP expired"),
        (status = 404, description = "User not found"),
        (status = 409, description = "OTP does not match the latest code"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn verify_account(
    State(state): State<AppState>,
    Json(payload): Json<VerifyAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, &state.mailer);

    let user = service.verify_account(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Account verified", user)),
    ))
}

/// Request a password reset code by email.
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset code emailed"),
        (status = 404, description = "Email not registered"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, &state.mailer);

    service.forgot_password(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Password reset code sent to your email",
            (),
        )),
    ))
}

/// Reset the password using the emailed OTP.
#[utoipa::path(
    post,
    path = "/api/v1/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Password too short"),
        (status = 403, description = "OTP expired"),
        (status = 404, description = "User not found"),
        (status = 409, description = "OTP does not match the latest code"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, &state.mailer);

    service.reset_password(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Password updated", ())),
    ))
}
