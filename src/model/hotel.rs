//! Hotel browsing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the hotel list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HotelListParams {
    pub province_id: Option<i32>,
    /// `az` or `za` for case-insensitive name ordering; anything else keeps
    /// the id ordering.
    pub sort_by: Option<String>,
}

/// Query parameters for the best rated hotel list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BestHotelsParams {
    /// How many hotels to return, ten when absent.
    pub limit: Option<u64>,
}

/// Hotel list/detail item enriched with its province name and cover image.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i32,
    pub hotel_name: String,
    pub hotel_address: String,
    pub star_rating: Option<i32>,
    pub province_id: Option<i32>,
    pub province_name: Option<String>,
    /// First image attached to the hotel, if any.
    pub image_url: Option<String>,
}

impl HotelDto {
    pub fn from_parts(
        hotel: entity::hotel::Model,
        province_name: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: hotel.id,
            hotel_name: hotel.hotel_name,
            hotel_address: hotel.hotel_address,
            star_rating: hotel.star_rating,
            province_id: hotel.province_id,
            province_name,
            image_url,
        }
    }
}
