//! Hotel image factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a hotel image with a unique URL for the given hotel.
pub async fn create_hotel_image(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::hotel_image::Model, DbErr> {
    let id = next_id();
    entity::hotel_image::ActiveModel {
        hotel_id: ActiveValue::Set(hotel_id),
        image_url: ActiveValue::Set(format!("https://img.example.com/hotels/{}.jpg", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
