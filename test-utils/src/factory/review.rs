//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    room_id: i32,
    user_id: i32,
    rating: i32,
    comment: String,
    comment_date: NaiveDate,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32, room_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            room_id,
            user_id,
            rating: 4,
            comment: format!("Review comment {}", id),
            comment_date: Utc::now().date_naive(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn comment_date(mut self, comment_date: NaiveDate) -> Self {
        self.comment_date = comment_date;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            comment_date: ActiveValue::Set(self.comment_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    hotel_id: i32,
    room_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, hotel_id, room_id, user_id)
        .build()
        .await
}
