use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ApiResponse,
        room::{RoomDetailDto, RoomImageDto, RoomSearchParams},
    },
    service::room::RoomService,
    state::AppState,
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Search available rooms.
///
/// The keyword matches room type, room description, hotel name and hotel
/// address case-insensitively; all other filters are combined with AND.
/// Results are paginated with a zero-based page index.
///
/// # Returns
/// - `200 OK` - One page of matching rooms
/// - `400 Bad Request` - Min price above max price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/rooms/search",
    tag = ROOM_TAG,
    params(RoomSearchParams),
    responses(
        (status = 200, description = "One page of matching rooms"),
        (status = 400, description = "Invalid price range"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = RoomService::new(&state.db).search(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Rooms", page)),
    ))
}

/// Get one room with its images and features.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room detail", body = RoomDetailDto),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Room", room))))
}

/// Get one image of one room.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/images/{image_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        ("image_id" = i32, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Room image", body = RoomImageDto),
        (status = 404, description = "Image not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_room_image(
    State(state): State<AppState>,
    Path((room_id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let image = RoomService::new(&state.db)
        .get_image(room_id, image_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Image", image))))
}
