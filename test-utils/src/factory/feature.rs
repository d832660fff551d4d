//! Room feature factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a feature for the given room.
pub async fn create_feature(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::feature::Model, DbErr> {
    let id = next_id();
    entity::feature::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        title: ActiveValue::Set(format!("Feature {}", id)),
        icon_name: ActiveValue::Set("wifi".to_string()),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
