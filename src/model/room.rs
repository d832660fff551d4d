//! Room search and detail DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the room search endpoint.
///
/// Every filter is optional and absent filters match everything. `page` is
/// zero-based and `size` defaults to ten rows.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchParams {
    /// Case-insensitive substring matched against room type, description,
    /// hotel name and hotel address.
    pub keyword: Option<String>,
    pub hotel_id: Option<i32>,
    pub room_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum adult capacity the room must offer.
    pub max_adults: Option<i32>,
    /// Minimum child capacity the room must offer.
    pub max_children: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
    /// One of `price`, `max_adults`, `max_children`, `room_type`; anything
    /// else falls back to the id column.
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort_direction: Option<String>,
}

fn default_page_size() -> u64 {
    10
}

/// Query parameters for listing the rooms of one hotel.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HotelRoomsParams {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// One of `price_asc`, `price_desc`, `title_az`, `title_za`.
    pub sort: Option<String>,
}

/// Room list item with the owning hotel's name and a cover image.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub room_type: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub max_adults: i32,
    pub max_children: i32,
    pub bed_count: i32,
    pub bathroom_count: i32,
    pub available: bool,
    pub hotel_name: Option<String>,
    pub image_url: Option<String>,
}

impl RoomDto {
    pub fn from_parts(
        room: entity::room::Model,
        hotel_name: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_type: room.room_type,
            description: room.description,
            price: room.price,
            max_adults: room.max_adults,
            max_children: room.max_children,
            bed_count: room.bed_count,
            bathroom_count: room.bathroom_count,
            available: room.available,
            hotel_name,
            image_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomImageDto {
    pub id: i32,
    pub image_url: String,
    pub size: String,
}

impl From<entity::room_image::Model> for RoomImageDto {
    fn from(image: entity::room_image::Model) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            size: image.size,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDto {
    pub id: i32,
    pub title: String,
    pub icon_name: String,
    pub description: Option<String>,
}

impl From<entity::feature::Model> for FeatureDto {
    fn from(feature: entity::feature::Model) -> Self {
        Self {
            id: feature.id,
            title: feature.title,
            icon_name: feature.icon_name,
            description: feature.description,
        }
    }
}

/// Full room detail with every image and feature attached.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    #[serde(flatten)]
    pub room: RoomDto,
    pub images: Vec<RoomImageDto>,
    pub features: Vec<FeatureDto>,
}
