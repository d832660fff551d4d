use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ApiResponse,
        booking::{BookingDto, BookingListParams, CreateBookingDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a booking for the authenticated user.
///
/// The total price is computed server-side from the room's nightly price
/// and the length of stay. The booking starts in pending status.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - Booking created in pending status
/// - `400 Bad Request` - Invalid dates or guest counts
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Room, hotel or payment method missing
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid dates or guest counts"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Room, hotel or payment method missing"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let booking = BookingService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Booking created", booking)),
    ))
}

/// List the authenticated user's bookings, newest first.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    params(BookingListParams),
    responses(
        (status = 200, description = "User's bookings", body = [BookingDto]),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let bookings = BookingService::new(&state.db)
        .get_for_user(user.id, params.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Bookings", bookings)),
    ))
}
