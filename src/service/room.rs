use sea_orm::{DatabaseConnection, Order};

use crate::{
    data::{
        hotel::HotelRepository,
        room::{RoomRepository, RoomSearchFilter},
    },
    error::AppError,
    model::{
        api::PageDto,
        room::{HotelRoomsParams, RoomDetailDto, RoomDto, RoomImageDto, RoomSearchParams},
    },
};

const DEFAULT_PAGE_SIZE: u64 = 10;

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches available rooms and returns one page of results.
    pub async fn search(&self, params: RoomSearchParams) -> Result<PageDto<RoomDto>, AppError> {
        if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
            if min > max {
                return Err(AppError::field(
                    "maxPrice",
                    "Max price must be greater than or equal to min price",
                ));
            }
        }

        let size = if params.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            params.size
        };

        let sort_column = match params.sort_by.as_deref() {
            Some("price") => entity::room::Column::Price,
            Some("max_adults") | Some("maxAdults") => entity::room::Column::MaxAdults,
            Some("max_children") | Some("maxChildren") => entity::room::Column::MaxChildren,
            Some("room_type") | Some("roomType") => entity::room::Column::RoomType,
            _ => entity::room::Column::Id,
        };
        let sort_order = match params.sort_direction.as_deref() {
            Some(direction) if direction.eq_ignore_ascii_case("desc") => Order::Desc,
            _ => Order::Asc,
        };

        let repo = RoomRepository::new(self.db);
        let (rooms, total_elements, total_pages) = repo
            .search(
                RoomSearchFilter {
                    keyword: params.keyword,
                    hotel_id: params.hotel_id,
                    room_type: params.room_type,
                    min_price: params.min_price,
                    max_price: params.max_price,
                    min_adults: params.max_adults,
                    min_children: params.max_children,
                },
                (sort_column, sort_order),
                params.page,
                size,
            )
            .await?;

        let content = self.to_dtos(rooms).await?;

        Ok(PageDto::new(
            content,
            params.page,
            size,
            total_elements,
            total_pages,
        ))
    }

    /// Gets a room with all of its images and features.
    pub async fn get_detail(&self, id: i32) -> Result<RoomDetailDto, AppError> {
        let repo = RoomRepository::new(self.db);

        let room = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let hotel = HotelRepository::new(self.db).get_by_id(room.hotel_id).await?;
        let images = repo.get_images(room.id).await?;
        let features = repo.get_features(room.id).await?;

        let image_url = images.first().map(|i| i.image_url.clone());
        let hotel_name = hotel.map(|(h, _)| h.hotel_name);

        Ok(RoomDetailDto {
            room: RoomDto::from_parts(room, hotel_name, image_url),
            images: images.into_iter().map(Into::into).collect(),
            features: features.into_iter().map(Into::into).collect(),
        })
    }

    /// Lists the available rooms of one hotel, optionally bounded by price.
    pub async fn get_by_hotel(
        &self,
        hotel_id: i32,
        params: HotelRoomsParams,
    ) -> Result<Vec<RoomDto>, AppError> {
        if !HotelRepository::new(self.db).exists(hotel_id).await? {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
            if min > max {
                return Err(AppError::field(
                    "maxPrice",
                    "Max price must be greater than or equal to min price",
                ));
            }
        }

        let sort = match params.sort.as_deref() {
            Some("price_asc") => (entity::room::Column::Price, Order::Asc),
            Some("price_desc") => (entity::room::Column::Price, Order::Desc),
            Some("title_az") => (entity::room::Column::RoomType, Order::Asc),
            Some("title_za") => (entity::room::Column::RoomType, Order::Desc),
            _ => (entity::room::Column::Id, Order::Asc),
        };

        let repo = RoomRepository::new(self.db);
        let rooms = repo
            .get_by_hotel(hotel_id, params.min_price, params.max_price, sort)
            .await?;

        self.to_dtos(rooms).await
    }

    /// Gets one image of one room.
    pub async fn get_image(&self, room_id: i32, image_id: i32) -> Result<RoomImageDto, AppError> {
        RoomRepository::new(self.db)
            .get_image(room_id, image_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))
    }

    async fn to_dtos(&self, rooms: Vec<entity::room::Model>) -> Result<Vec<RoomDto>, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let hotel_repo = HotelRepository::new(self.db);

        let mut dtos = Vec::with_capacity(rooms.len());
        for room in rooms {
            let hotel = hotel_repo.get_by_id(room.hotel_id).await?;
            let image = room_repo.first_image(room.id).await?;
            dtos.push(RoomDto::from_parts(
                room,
                hotel.map(|(h, _)| h.hotel_name),
                image.map(|i| i.image_url),
            ));
        }

        Ok(dtos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use test_utils::{builder::TestBuilder, factory};

    fn search_params(sort_by: Option<&str>) -> RoomSearchParams {
        RoomSearchParams {
            keyword: None,
            hotel_id: None,
            room_type: None,
            min_price: None,
            max_price: None,
            max_adults: None,
            max_children: None,
            page: 0,
            size: 10,
            sort_by: sort_by.map(String::from),
            sort_direction: None,
        }
    }

    #[tokio::test]
    async fn filterless_search_lists_available_rooms_id_ascending() {
        let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await.unwrap();
        let hotel = factory::hotel::HotelFactory::new(db)
            .manager_id(user.id)
            .build()
            .await
            .unwrap();

        let first = factory::room::create_room(db, hotel.id).await.unwrap();
        factory::room::RoomFactory::new(db, hotel.id)
            .available(false)
            .build()
            .await
            .unwrap();
        let last = factory::room::create_room(db, hotel.id).await.unwrap();

        let service = RoomService::new(db);
        let page = service.search(search_params(None)).await.unwrap();

        let ids: Vec<i32> = page.content.iter().map(|room| room.id).collect();
        assert_eq!(ids, vec![first.id, last.id]);
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn unknown_sort_key_falls_back_to_id_ascending() {
        let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await.unwrap();
        let hotel = factory::hotel::HotelFactory::new(db)
            .manager_id(user.id)
            .build()
            .await
            .unwrap();

        // Prices descend with id so a silent price sort would flip the order.
        let mut ids = Vec::new();
        for price in [30000, 20000, 10000] {
            let room = factory::room::RoomFactory::new(db, hotel.id)
                .price(Decimal::new(price, 2))
                .build()
                .await
                .unwrap();
            ids.push(room.id);
        }

        let service = RoomService::new(db);
        let page = service.search(search_params(Some("newest"))).await.unwrap();

        let returned: Vec<i32> = page.content.iter().map(|room| room.id).collect();
        assert_eq!(returned, ids);
    }
}
