//! Province factory.
//!
//! Province ids are externally assigned in production (the import job), so
//! the factory sets an explicit id from the counter.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a province with a unique explicit id.
pub async fn create_province(db: &DatabaseConnection) -> Result<entity::province::Model, DbErr> {
    let id = next_id();
    entity::province::ActiveModel {
        id: ActiveValue::Set(id as i32),
        province_name: ActiveValue::Set(format!("Province {}", id)),
        image_url: ActiveValue::Set(None),
        license_plates: ActiveValue::Set(serde_json::json!([format!("{}A", id)])),
    }
    .insert(db)
    .await
}
