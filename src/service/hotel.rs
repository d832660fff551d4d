use sea_orm::{DatabaseConnection, Order};

use crate::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{HotelDto, HotelListParams},
};

/// How many hotels the best-rated listing returns when no limit is given.
const DEFAULT_BEST_HOTEL_LIMIT: u64 = 10;

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists hotels with the optional province filter and name ordering.
    pub async fn get_all(&self, params: HotelListParams) -> Result<Vec<HotelDto>, AppError> {
        let name_order = match params.sort_by.as_deref() {
            Some("az") => Some(Order::Asc),
            Some("za") => Some(Order::Desc),
            _ => None,
        };

        let repo = HotelRepository::new(self.db);
        self.to_dtos(repo.get_all(params.province_id, name_order).await?)
            .await
    }

    /// Gets the highest rated hotels, best first.
    pub async fn get_best(&self, limit: Option<u64>) -> Result<Vec<HotelDto>, AppError> {
        let repo = HotelRepository::new(self.db);
        let limit = limit.unwrap_or(DEFAULT_BEST_HOTEL_LIMIT);
        self.to_dtos(repo.get_best(limit).await?).await
    }

    pub async fn get_by_province(&self, province_id: i32) -> Result<Vec<HotelDto>, AppError> {
        let repo = HotelRepository::new(self.db);
        self.to_dtos(repo.get_by_province(province_id).await?).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<HotelDto, AppError> {
        let repo = HotelRepository::new(self.db);

        let (hotel, province) = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

        let image = repo.first_image(hotel.id).await?;

        Ok(HotelDto::from_parts(
            hotel,
            province.map(|p| p.province_name),
            image.map(|i| i.image_url),
        ))
    }

    async fn to_dtos(
        &self,
        hotels: Vec<(entity::hotel::Model, Option<entity::province::Model>)>,
    ) -> Result<Vec<HotelDto>, AppError> {
        let repo = HotelRepository::new(self.db);

        let mut dtos = Vec::with_capacity(hotels.len());
        for (hotel, province) in hotels {
            let image = repo.first_image(hotel.id).await?;
            dtos.push(HotelDto::from_parts(
                hotel,
                province.map(|p| p.province_name),
                image.map(|i| i.image_url),
            ));
        }

        Ok(dtos)
    }
}
