use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ApiResponse,
        province::{ImportSummaryDto, ProvinceDto, WardDto},
    },
    service::province::ProvinceService,
    state::AppState,
};

/// Tag for grouping province endpoints in OpenAPI documentation
pub static PROVINCE_TAG: &str = "province";

/// List all provinces.
#[utoipa::path(
    get,
    path = "/api/v1/provinces",
    tag = PROVINCE_TAG,
    responses(
        (status = 200, description = "All provinces", body = [ProvinceDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_provinces(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let provinces = ProvinceService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Provinces", provinces)),
    ))
}

/// Get one province by id.
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{id}",
    tag = PROVINCE_TAG,
    params(
        ("id" = i32, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Province", body = ProvinceDto),
        (status = 404, description = "Province not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_province(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let province = ProvinceService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Province", province)),
    ))
}

/// List the wards of one province.
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{id}/wards",
    tag = PROVINCE_TAG,
    params(
        ("id" = i32, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Wards of the province", body = [WardDto]),
        (status = 404, description = "Province not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_province_wards(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let wards = ProvinceService::new(&state.db).get_wards(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success("Wards", wards))))
}

/// Import provinces and wards from the external feed.
///
/// Upserts every province by id and replaces its ward list, so repeated
/// imports are safe.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    post,
    path = "/api/v1/provinces/import",
    tag = PROVINCE_TAG,
    responses(
        (status = 200, description = "Import summary", body = ImportSummaryDto),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Feed unreachable or database error")
    ),
)]
pub async fn import_provinces(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let summary = ProvinceService::new(&state.db)
        .import(&state.http_client, &state.province_api_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Provinces imported", summary)),
    ))
}
