//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Rooms default to available with a nightly price of 100.00.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    room_type: String,
    description: Option<String>,
    price: Decimal,
    max_adults: i32,
    max_children: i32,
    available: bool,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            room_type: format!("Standard {}", id),
            description: Some(format!("Room {} description", id)),
            price: Decimal::new(10000, 2),
            max_adults: 2,
            max_children: 1,
            available: true,
        }
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn max_adults(mut self, max_adults: i32) -> Self {
        self.max_adults = max_adults;
        self
    }

    pub fn max_children(mut self, max_children: i32) -> Self {
        self.max_children = max_children;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            room_type: ActiveValue::Set(self.room_type),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            max_adults: ActiveValue::Set(self.max_adults),
            max_children: ActiveValue::Set(self.max_children),
            bed_count: ActiveValue::Set(1),
            bathroom_count: ActiveValue::Set(1),
            available: ActiveValue::Set(self.available),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values for the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
