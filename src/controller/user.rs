use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::ApiResponse, user::{UpdateProfileDto, UserDto}},
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user's profile.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile", UserDto::from(user))),
    ))
}

/// Update the authenticated user's profile.
///
/// Only the fields present in the body change. A new phone number must be
/// unused by any other account.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Per-field validation errors"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Phone number already registered"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(user, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile updated", updated)),
    ))
}
