//! Payment method factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a payment method with a unique code.
pub async fn create_payment_method(
    db: &DatabaseConnection,
) -> Result<entity::payment_method::Model, DbErr> {
    let id = next_id();
    entity::payment_method::ActiveModel {
        code: ActiveValue::Set(format!("PM{}", id)),
        name: ActiveValue::Set(format!("Payment Method {}", id)),
        image_url: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
