use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ApiResponse,
        review::{CreateReviewDto, ReviewDto},
    },
    service::review::ReviewService,
    state::AppState,
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListParams {
    pub hotel_id: i32,
    pub room_id: i32,
}

/// List the reviews of a room, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    params(ReviewListParams),
    responses(
        (status = 200, description = "Reviews for the room", body = [ReviewDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_for_room(params.hotel_id, params.room_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Reviews", reviews)),
    ))
}

/// Add a review as the authenticated user.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid rating or empty comment"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Hotel or room not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let review = ReviewService::new(&state.db).create(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Review created", review)),
    ))
}
