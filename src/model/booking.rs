//! Booking request and response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use entity::booking::BookingStatus;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: i32,
    pub hotel_id: i32,
    pub payment_method_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: i32,
    #[serde(default)]
    pub children: i32,
    #[serde(default)]
    pub infants: i32,
    pub payment_option: Option<String>,
}

/// Optional status filter for the booking list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingListParams {
    /// One of `pending`, `confirmed`, `cancelled`, `completed`.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub hotel_id: i32,
    pub payment_method_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub total_price: Decimal,
    pub payment_option: Option<String>,
    #[schema(value_type = String)]
    pub status: BookingStatus,
    /// Cover image of the booked room, if one is attached.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BookingDto {
    pub fn from_parts(booking: entity::booking::Model, image_url: Option<String>) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            room_id: booking.room_id,
            hotel_id: booking.hotel_id,
            payment_method_id: booking.payment_method_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            adults: booking.adults,
            children: booking.children,
            infants: booking.infants,
            total_price: booking.total_price,
            payment_option: booking.payment_option,
            status: booking.status,
            image_url,
            created_at: booking.created_at,
        }
    }
}
