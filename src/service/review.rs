use sea_orm::DatabaseConnection;

use crate::{
    data::{
        hotel::HotelRepository,
        review::{CreateReviewParams, ReviewRepository},
        room::RoomRepository,
    },
    error::AppError,
    model::review::{CreateReviewDto, ReviewDto},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a review by the authenticated user, dated today.
    pub async fn create(&self, user_id: i32, dto: CreateReviewDto) -> Result<ReviewDto, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::field("rating", "Rating must be between 1 and 5"));
        }
        if dto.comment.trim().is_empty() {
            return Err(AppError::field("comment", "Comment is required"));
        }

        if !HotelRepository::new(self.db).exists(dto.hotel_id).await? {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        let room = RoomRepository::new(self.db)
            .get_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if room.hotel_id != dto.hotel_id {
            return Err(AppError::field(
                "roomId",
                "Room does not belong to the given hotel",
            ));
        }

        let review = ReviewRepository::new(self.db)
            .create(CreateReviewParams {
                hotel_id: dto.hotel_id,
                room_id: dto.room_id,
                user_id,
                rating: dto.rating,
                comment: dto.comment,
            })
            .await?;

        Ok(ReviewDto::from_parts(review, None))
    }

    /// Lists the reviews of a room, newest first.
    pub async fn get_for_room(
        &self,
        hotel_id: i32,
        room_id: i32,
    ) -> Result<Vec<ReviewDto>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .get_for_room(hotel_id, room_id)
            .await?;

        Ok(reviews
            .into_iter()
            .map(|(review, user)| ReviewDto::from_parts(review, user))
            .collect())
    }
}
