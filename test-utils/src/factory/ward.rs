//! Ward factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ward belonging to the given province.
pub async fn create_ward(
    db: &DatabaseConnection,
    province_id: i32,
) -> Result<entity::ward::Model, DbErr> {
    let id = next_id();
    entity::ward::ActiveModel {
        name: ActiveValue::Set(format!("Ward {}", id)),
        merged_from: ActiveValue::Set(serde_json::json!([])),
        province_id: ActiveValue::Set(province_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
