use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::register,
        controller::auth::login,
        controller::auth::verify_account,
        controller::auth::forgot_password,
        controller::auth::reset_password,
        controller::user::get_profile,
        controller::user::update_profile,
        controller::hotel::get_hotels,
        controller::hotel::get_best_hotels,
        controller::hotel::get_hotels_by_province,
        controller::hotel::get_hotel,
        controller::hotel::get_hotel_rooms,
        controller::room::search_rooms,
        controller::room::get_room,
        controller::room::get_room_image,
        controller::booking::create_booking,
        controller::booking::get_bookings,
        controller::review::get_reviews,
        controller::review::create_review,
        controller::payment_method::get_payment_methods,
        controller::payment_method::get_payment_method,
        controller::province::get_provinces,
        controller::province::get_province,
        controller::province::get_province_wards,
        controller::province::import_provinces,
    ),
    info(
        title = "StayHub API",
        description = "Hotel booking backend: accounts, hotel and room browsing, bookings and reviews."
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/register", post(controller::auth::register))
        .route("/api/v1/auth/login", post(controller::auth::login))
        .route(
            "/api/v1/auth/verify-otp",
            post(controller::auth::verify_account),
        )
        .route(
            "/api/v1/auth/forgot-password",
            post(controller::auth::forgot_password),
        )
        .route(
            "/api/v1/auth/reset-password",
            post(controller::auth::reset_password),
        )
        .route("/api/v1/users/me", get(controller::user::get_profile))
        .route("/api/v1/users/me", put(controller::user::update_profile))
        .route("/api/v1/hotels", get(controller::hotel::get_hotels))
        .route("/api/v1/hotels/best", get(controller::hotel::get_best_hotels))
        .route(
            "/api/v1/hotels/province/{province_id}",
            get(controller::hotel::get_hotels_by_province),
        )
        .route("/api/v1/hotels/{id}", get(controller::hotel::get_hotel))
        .route(
            "/api/v1/hotels/{id}/rooms",
            get(controller::hotel::get_hotel_rooms),
        )
        .route("/api/v1/rooms/search", get(controller::room::search_rooms))
        .route("/api/v1/rooms/{id}", get(controller::room::get_room))
        .route(
            "/api/v1/rooms/{room_id}/images/{image_id}",
            get(controller::room::get_room_image),
        )
        .route(
            "/api/v1/bookings",
            post(controller::booking::create_booking).get(controller::booking::get_bookings),
        )
        .route(
            "/api/v1/reviews",
            get(controller::review::get_reviews).post(controller::review::create_review),
        )
        .route(
            "/api/v1/payment-methods",
            get(controller::payment_method::get_payment_methods),
        )
        .route(
            "/api/v1/payment-methods/{id}",
            get(controller::payment_method::get_payment_method),
        )
        .route("/api/v1/provinces", get(controller::province::get_provinces))
        .route(
            "/api/v1/provinces/{id}",
            get(controller::province::get_province),
        )
        .route(
            "/api/v1/provinces/{id}/wards",
            get(controller::province::get_province_wards),
        )
        .route(
            "/api/v1/provinces/import",
            post(controller::province::import_provinces),
        )
}

/// Swagger UI serving the generated OpenAPI document.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
