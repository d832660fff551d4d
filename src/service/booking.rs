use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use entity::booking::BookingStatus;

use crate::{
    data::{
        booking::{BookingRepository, CreateBookingParams},
        hotel::HotelRepository,
        payment_method::PaymentMethodRepository,
        room::RoomRepository,
    },
    error::AppError,
    model::booking::{BookingDto, CreateBookingDto},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking for the authenticated user.
    ///
    /// The total price is computed server-side as the room's nightly price
    /// times the number of nights; client-supplied totals are never trusted.
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateBookingDto,
    ) -> Result<BookingDto, AppError> {
        let room_repo = RoomRepository::new(self.db);

        let room = room_repo
            .get_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if !HotelRepository::new(self.db).exists(dto.hotel_id).await? {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        if PaymentMethodRepository::new(self.db)
            .find_by_id(dto.payment_method_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Payment method not found".to_string()));
        }

        if room.hotel_id != dto.hotel_id {
            return Err(AppError::field(
                "roomId",
                "Room does not belong to the given hotel",
            ));
        }

        if dto.check_out_date <= dto.check_in_date {
            return Err(AppError::field(
                "checkOutDate",
                "Check-out date must be after check-in date",
            ));
        }

        if dto.adults < 1 {
            return Err(AppError::field("adults", "At least one adult is required"));
        }

        let nights = (dto.check_out_date - dto.check_in_date).num_days();
        let total_price = room.price * Decimal::from(nights);

        let booking = BookingRepository::new(self.db)
            .create(CreateBookingParams {
                user_id,
                room_id: dto.room_id,
                hotel_id: dto.hotel_id,
                payment_method_id: dto.payment_method_id,
                check_in_date: dto.check_in_date,
                check_out_date: dto.check_out_date,
                adults: dto.adults,
                children: dto.children,
                infants: dto.infants,
                total_price,
                payment_option: dto.payment_option,
            })
            .await?;

        let image = room_repo.first_image(booking.room_id).await?;

        Ok(BookingDto::from_parts(booking, image.map(|i| i.image_url)))
    }

    /// Lists the user's bookings, optionally filtered by status.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        status: Option<String>,
    ) -> Result<Vec<BookingDto>, AppError> {
        let status = match status.as_deref() {
            None => None,
            Some(raw) => Some(parse_status(raw).ok_or_else(|| {
                AppError::field("status", "Invalid booking status")
            })?),
        };

        let bookings = BookingRepository::new(self.db)
            .get_by_user(user_id, status)
            .await?;

        let room_repo = RoomRepository::new(self.db);
        let mut dtos = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let image = room_repo.first_image(booking.room_id).await?;
            dtos.push(BookingDto::from_parts(booking, image.map(|i| i.image_url)));
        }

        Ok(dtos)
    }
}

fn parse_status(raw: &str) -> Option<BookingStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "pending" => Some(BookingStatus::Pending),
        "confirmed" => Some(BookingStatus::Confirmed),
        "cancelled" => Some(BookingStatus::Cancelled),
        "completed" => Some(BookingStatus::Completed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    fn dto(room_id: i32, hotel_id: i32, payment_method_id: i32) -> CreateBookingDto {
        let check_in = Utc::now().date_naive() + Duration::days(14);
        CreateBookingDto {
            room_id,
            hotel_id,
            payment_method_id,
            check_in_date: check_in,
            check_out_date: check_in + Duration::days(3),
            adults: 2,
            children: 1,
            infants: 0,
            payment_option: None,
        }
    }

    #[tokio::test]
    async fn computes_total_from_price_and_nights() {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, hotel, room, payment_method) =
            factory::helpers::create_booking_dependencies(db).await.unwrap();

        let service = BookingService::new(db);
        let booking = service
            .create(user.id, dto(room.id, hotel.id, payment_method.id))
            .await
            .unwrap();

        // Three nights at the room factory's default rate of 100.00.
        assert_eq!(booking.total_price, Decimal::new(30000, 2));
        assert_eq!(booking.status, entity::booking::BookingStatus::Pending);
        assert_eq!(booking.user_id, user.id);
    }

    #[tokio::test]
    async fn rejects_check_out_not_after_check_in() {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, hotel, room, payment_method) =
            factory::helpers::create_booking_dependencies(db).await.unwrap();

        let mut request = dto(room.id, hotel.id, payment_method.id);
        request.check_out_date = request.check_in_date;

        let service = BookingService::new(db);
        let err = service.create(user.id, request).await.unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key("checkOutDate"));
    }

    #[tokio::test]
    async fn rejects_unknown_room() {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, hotel, _room, payment_method) =
            factory::helpers::create_booking_dependencies(db).await.unwrap();

        let service = BookingService::new(db);
        let err = service
            .create(user.id, dto(9999, hotel.id, payment_method.id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn filters_bookings_by_status() {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, hotel, room, payment_method) =
            factory::helpers::create_booking_dependencies(db).await.unwrap();

        factory::booking::BookingFactory::new(db, user.id, room.id, hotel.id, payment_method.id)
            .build()
            .await
            .unwrap();
        factory::booking::BookingFactory::new(db, user.id, room.id, hotel.id, payment_method.id)
            .status(BookingStatus::Confirmed)
            .build()
            .await
            .unwrap();

        let service = BookingService::new(db);

        let pending = service
            .get_for_user(user.id, Some("pending".to_string()))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].status, BookingStatus::Pending);

        let all = service.get_for_user(user.id, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn rejects_unknown_status_filter() {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await.unwrap();

        let service = BookingService::new(db);
        let err = service
            .get_for_user(user.id, Some("archived".to_string()))
            .await
            .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key("status"));
    }
}
