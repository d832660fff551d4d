use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CreateReviewParams {
    pub hotel_id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review dated today.
    pub async fn create(
        &self,
        params: CreateReviewParams,
    ) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            room_id: ActiveValue::Set(params.room_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            comment_date: ActiveValue::Set(now.date_naive()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the reviews for a room with their authors, newest comment date
    /// first. Reviews from the same day order by id descending so the most
    /// recently written one leads.
    pub async fn get_for_room(
        &self,
        hotel_id: i32,
        room_id: i32,
    ) -> Result<Vec<(entity::review::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Review::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::review::Column::HotelId.eq(hotel_id))
            .filter(entity::review::Column::RoomId.eq(room_id))
            .order_by_desc(entity::review::Column::CommentDate)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }
}
