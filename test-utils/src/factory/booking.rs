//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Defaults to a two-night pending booking starting a week from today with
/// a total price of 200.00 (two nights at the room factory's default rate).
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    hotel_id: i32,
    payment_method_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    total_price: Decimal,
    status: entity::booking::BookingStatus,
}

impl<'a> BookingFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: i32,
        room_id: i32,
        hotel_id: i32,
        payment_method_id: i32,
    ) -> Self {
        let check_in = Utc::now().date_naive() + Duration::days(7);
        Self {
            db,
            user_id,
            room_id,
            hotel_id,
            payment_method_id,
            check_in_date: check_in,
            check_out_date: check_in + Duration::days(2),
            total_price: Decimal::new(20000, 2),
            status: entity::booking::BookingStatus::Pending,
        }
    }

    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in_date = check_in;
        self.check_out_date = check_out;
        self
    }

    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: entity::booking::BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            payment_method_id: ActiveValue::Set(self.payment_method_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            adults: ActiveValue::Set(2),
            children: ActiveValue::Set(0),
            infants: ActiveValue::Set(0),
            total_price: ActiveValue::Set(self.total_price),
            payment_option: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
    hotel_id: i32,
    payment_method_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, room_id, hotel_id, payment_method_id)
        .build()
        .await
}
