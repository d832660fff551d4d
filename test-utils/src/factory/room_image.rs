//! Room image factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a room image with a unique URL for the given room.
pub async fn create_room_image(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::room_image::Model, DbErr> {
    let id = next_id();
    entity::room_image::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        image_url: ActiveValue::Set(format!("https://img.example.com/rooms/{}.jpg", id)),
        size: ActiveValue::Set("1024x768".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
