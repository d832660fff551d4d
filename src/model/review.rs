//! Review DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub hotel_id: i32,
    pub room_id: i32,
    /// Star rating from 1 to 5.
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub hotel_id: i32,
    pub room_id: i32,
    pub user_id: i32,
    /// Display name of the reviewer.
    pub user_full_name: Option<String>,
    pub user_avatar: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub comment_date: NaiveDate,
}

impl ReviewDto {
    pub fn from_parts(review: entity::review::Model, user: Option<entity::user::Model>) -> Self {
        let (user_full_name, user_avatar) = match user {
            Some(user) => (Some(user.full_name), user.avatar),
            None => (None, None),
        };

        Self {
            id: review.id,
            hotel_id: review.hotel_id,
            room_id: review.room_id,
            user_id: review.user_id,
            user_full_name,
            user_avatar,
            rating: review.rating,
            comment: review.comment,
            comment_date: review.comment_date,
        }
    }
}
