//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_name: String,
    hotel_address: String,
    star_rating: Option<i32>,
    manager_id: Option<i32>,
    province_id: Option<i32>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - hotel_name: `"Hotel {id}"`
    /// - hotel_address: `"{id} Test Street"`
    /// - star_rating / manager_id / province_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_name: format!("Hotel {}", id),
            hotel_address: format!("{} Test Street", id),
            star_rating: None,
            manager_id: None,
            province_id: None,
        }
    }

    pub fn hotel_name(mut self, hotel_name: impl Into<String>) -> Self {
        self.hotel_name = hotel_name.into();
        self
    }

    pub fn hotel_address(mut self, hotel_address: impl Into<String>) -> Self {
        self.hotel_address = hotel_address.into();
        self
    }

    pub fn star_rating(mut self, star_rating: i32) -> Self {
        self.star_rating = Some(star_rating);
        self
    }

    pub fn manager_id(mut self, manager_id: i32) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn province_id(mut self, province_id: i32) -> Self {
        self.province_id = Some(province_id);
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        let now = Utc::now();
        entity::hotel::ActiveModel {
            hotel_name: ActiveValue::Set(self.hotel_name),
            hotel_address: ActiveValue::Set(self.hotel_address),
            star_rating: ActiveValue::Set(self.star_rating),
            manager_id: ActiveValue::Set(self.manager_id),
            province_id: ActiveValue::Set(self.province_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
