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
        hotel::{BestHotelsParams, HotelDto, HotelListParams},
        room::{HotelRoomsParams, RoomDto},
    },
    service::{hotel::HotelService, room::RoomService},
    state::AppState,
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// List hotels.
///
/// Supports an optional province filter and the case-insensitive name sorts
/// `az` and `za`. Without a sort hotels come back in id order.
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = HOTEL_TAG,
    params(HotelListParams),
    responses(
        (status = 200, description = "Matching hotels", body = [HotelDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    Query(params): Query<HotelListParams>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db).get_all(params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Hotels", hotels))))
}

/// List the best rated hotels, highest star rating first.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/best",
    tag = HOTEL_TAG,
    params(BestHotelsParams),
    responses(
        (status = 200, description = "Best rated hotels", body = [HotelDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_best_hotels(
    State(state): State<AppState>,
    Query(params): Query<BestHotelsParams>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db).get_best(params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Best rated hotels", hotels)),
    ))
}

/// List the hotels of one province.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/province/{province_id}",
    tag = HOTEL_TAG,
    params(
        ("province_id" = i32, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Hotels in the province", body = [HotelDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_hotels_by_province(
    State(state): State<AppState>,
    Path(province_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db)
        .get_by_province(province_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Hotels", hotels))))
}

/// Get one hotel by id.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel detail", body = HotelDto),
        (status = 404, description = "Hotel not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Hotel", hotel))))
}

/// List the available rooms of one hotel.
///
/// Supports an optional price range and the sorts `price_asc`, `price_desc`,
/// `title_az` and `title_za`.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}/rooms",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID"),
        HotelRoomsParams
    ),
    responses(
        (status = 200, description = "Rooms of the hotel", body = [RoomDto]),
        (status = 400, description = "Invalid price range"),
        (status = 404, description = "Hotel not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<HotelRoomsParams>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_by_hotel(id, params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Rooms", rooms))))
}
