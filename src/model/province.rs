//! Province and ward DTOs, including the import feed format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceDto {
    pub id: i32,
    pub province_name: String,
    pub image_url: Option<String>,
    pub license_plates: Vec<String>,
}

impl From<entity::province::Model> for ProvinceDto {
    fn from(province: entity::province::Model) -> Self {
        // License plates are stored as a JSON array of strings.
        let license_plates =
            serde_json::from_value(province.license_plates).unwrap_or_default();

        Self {
            id: province.id,
            province_name: province.province_name,
            image_url: province.image_url,
            license_plates,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WardDto {
    pub id: i32,
    pub name: String,
    pub merged_from: Vec<String>,
    pub province_id: i32,
}

impl From<entity::ward::Model> for WardDto {
    fn from(ward: entity::ward::Model) -> Self {
        let merged_from = serde_json::from_value(ward.merged_from).unwrap_or_default();

        Self {
            id: ward.id,
            name: ward.name,
            merged_from,
            province_id: ward.province_id,
        }
    }
}

/// Counts reported back after a province import run.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummaryDto {
    pub provinces: u64,
    pub wards: u64,
}

/// Top-level payload returned by the external province API.
#[derive(Debug, Deserialize)]
pub struct ProvinceFeed {
    pub data: Vec<ProvinceFeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceFeedItem {
    /// Numeric id delivered as a string by the feed.
    pub id: String,
    pub province_name: String,
    #[serde(default)]
    pub license_plates: serde_json::Value,
    #[serde(default)]
    pub wards: Vec<WardFeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardFeedItem {
    pub name: String,
    #[serde(default)]
    pub merged_from: serde_json::Value,
}
