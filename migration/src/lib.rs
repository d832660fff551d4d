pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_user_table;
mod m20250801_000002_create_province_table;
mod m20250801_000003_create_ward_table;
mod m20250801_000004_create_hotel_table;
mod m20250801_000005_create_hotel_image_table;
mod m20250801_000006_create_room_table;
mod m20250801_000007_create_room_image_table;
mod m20250801_000008_create_feature_table;
mod m20250801_000009_create_payment_method_table;
mod m20250801_000010_create_booking_table;
mod m20250801_000011_create_review_table;
mod m20250801_000012_create_password_reset_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_user_table::Migration),
            Box::new(m20250801_000002_create_province_table::Migration),
            Box::new(m20250801_000003_create_ward_table::Migration),
            Box::new(m20250801_000004_create_hotel_table::Migration),
            Box::new(m20250801_000005_create_hotel_image_table::Migration),
            Box::new(m20250801_000006_create_room_table::Migration),
            Box::new(m20250801_000007_create_room_image_table::Migration),
            Box::new(m20250801_000008_create_feature_table::Migration),
            Box::new(m20250801_000009_create_payment_method_table::Migration),
            Box::new(m20250801_000010_create_booking_table::Migration),
            Box::new(m20250801_000011_create_review_table::Migration),
            Box::new(m20250801_000012_create_password_reset_token_table::Migration),
        ]
    }
}
