use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::booking::BookingStatus;

pub struct CreateBookingParams {
    pub user_id: i32,
    pub room_id: i32,
    pub hotel_id: i32,
    pub payment_method_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub total_price: Decimal,
    pub payment_option: Option<String>,
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in pending status.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            room_id: ActiveValue::Set(params.room_id),
            hotel_id: ActiveValue::Set(params.hotel_id),
            payment_method_id: ActiveValue::Set(params.payment_method_id),
            check_in_date: ActiveValue::Set(params.check_in_date),
            check_out_date: ActiveValue::Set(params.check_out_date),
            adults: ActiveValue::Set(params.adults),
            children: ActiveValue::Set(params.children),
            infants: ActiveValue::Set(params.infants),
            total_price: ActiveValue::Set(params.total_price),
            payment_option: ActiveValue::Set(params.payment_option),
            status: ActiveValue::Set(BookingStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user's bookings, newest first, optionally narrowed to one status.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }
}
