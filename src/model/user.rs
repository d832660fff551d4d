//! User profile DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account. The password hash never leaves the entity.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// `true` for male, `false` for female.
    pub gender: bool,
    pub avatar: Option<String>,
    pub date_of_birth: NaiveDate,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone_number: user.phone_number,
            gender: user.gender,
            avatar: user.avatar,
            date_of_birth: user.date_of_birth,
            verified: user.verified,
            created_at: user.created_at,
        }
    }
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<bool>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
