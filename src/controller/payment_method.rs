use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{api::ApiResponse, payment_method::PaymentMethodDto},
    service::payment_method::PaymentMethodService,
    state::AppState,
};

/// Tag for grouping payment method endpoints in OpenAPI documentation
pub static PAYMENT_METHOD_TAG: &str = "payment-method";

/// List the available payment methods.
#[utoipa::path(
    get,
    path = "/api/v1/payment-methods",
    tag = PAYMENT_METHOD_TAG,
    responses(
        (status = 200, description = "Payment methods", body = [PaymentMethodDto]),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_payment_methods(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let methods = PaymentMethodService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Payment methods", methods)),
    ))
}

/// Get one payment method by id.
#[utoipa::path(
    get,
    path = "/api/v1/payment-methods/{id}",
    tag = PAYMENT_METHOD_TAG,
    params(
        ("id" = i32, Path, description = "Payment method ID")
    ),
    responses(
        (status = 200, description = "Payment method", body = PaymentMethodDto),
        (status = 404, description = "Payment method not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let method = PaymentMethodService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Payment method", method)),
    ))
}
