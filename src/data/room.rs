use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Filters applied conjunctively by [`RoomRepository::search`]. Absent
/// fields match every room.
#[derive(Debug, Default)]
pub struct RoomSearchFilter {
    pub keyword: Option<String>,
    pub hotel_id: Option<i32>,
    pub room_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_adults: Option<i32>,
    pub min_children: Option<i32>,
}

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches available rooms with pagination.
    ///
    /// The keyword is matched case-insensitively against room type, room
    /// description, hotel name and hotel address. All other filters are
    /// exact or range comparisons combined with AND. Only rooms flagged
    /// available are ever returned.
    ///
    /// # Arguments
    /// - `filter`: Search filters, each optional
    /// - `sort`: Column and direction for ordering
    /// - `page`: Page number (0-indexed)
    /// - `size`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((rooms, total_items, total_pages))`: One page plus totals
    /// - `Err(DbErr)`: Database error
    pub async fn search(
        &self,
        filter: RoomSearchFilter,
        sort: (entity::room::Column, Order),
        page: u64,
        size: u64,
    ) -> Result<(Vec<entity::room::Model>, u64, u64), DbErr> {
        let mut condition = Condition::all().add(entity::room::Column::Available.eq(true));

        if let Some(keyword) = filter
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
        {
            let pattern = format!("%{}%", keyword.to_lowercase());
            condition = condition.add(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::room::Entity,
                            entity::room::Column::RoomType,
                        ))))
                        .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::room::Entity,
                            entity::room::Column::Description,
                        ))))
                        .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::hotel::Entity,
                            entity::hotel::Column::HotelName,
                        ))))
                        .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::hotel::Entity,
                            entity::hotel::Column::HotelAddress,
                        ))))
                        .like(&pattern),
                    ),
            );
        }

        if let Some(hotel_id) = filter.hotel_id {
            condition = condition.add(entity::room::Column::HotelId.eq(hotel_id));
        }
        if let Some(room_type) = filter.room_type {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col((
                    entity::room::Entity,
                    entity::room::Column::RoomType,
                ))))
                .eq(room_type.to_lowercase()),
            );
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(entity::room::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(entity::room::Column::Price.lte(max_price));
        }
        if let Some(min_adults) = filter.min_adults {
            condition = condition.add(entity::room::Column::MaxAdults.gte(min_adults));
        }
        if let Some(min_children) = filter.min_children {
            condition = condition.add(entity::room::Column::MaxChildren.gte(min_children));
        }

        let (sort_column, sort_order) = sort;
        let query = entity::prelude::Room::find()
            .join(JoinType::InnerJoin, entity::room::Relation::Hotel.def())
            .filter(condition)
            .order_by(sort_column, sort_order);

        let paginator = query.paginate(self.db, size);
        let totals = paginator.num_items_and_pages().await?;
        let rooms = paginator.fetch_page(page).await?;

        Ok((rooms, totals.number_of_items, totals.number_of_pages))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Gets the available rooms of one hotel within an optional price range.
    pub async fn get_by_hotel(
        &self,
        hotel_id: i32,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
        sort: (entity::room::Column, Order),
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::room::Column::HotelId.eq(hotel_id))
            .add(entity::room::Column::Available.eq(true));

        if let Some(min_price) = min_price {
            condition = condition.add(entity::room::Column::Price.gte(min_price));
        }
        if let Some(max_price) = max_price {
            condition = condition.add(entity::room::Column::Price.lte(max_price));
        }

        let (sort_column, sort_order) = sort;

        entity::prelude::Room::find()
            .filter(condition)
            .order_by(sort_column, sort_order)
            .all(self.db)
            .await
    }

    pub async fn get_images(
        &self,
        room_id: i32,
    ) -> Result<Vec<entity::room_image::Model>, DbErr> {
        entity::prelude::RoomImage::find()
            .filter(entity::room_image::Column::RoomId.eq(room_id))
            .order_by_asc(entity::room_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the first image attached to a room, by insertion order.
    pub async fn first_image(
        &self,
        room_id: i32,
    ) -> Result<Option<entity::room_image::Model>, DbErr> {
        entity::prelude::RoomImage::find()
            .filter(entity::room_image::Column::RoomId.eq(room_id))
            .order_by_asc(entity::room_image::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets one image of one room; both ids must match.
    pub async fn get_image(
        &self,
        room_id: i32,
        image_id: i32,
    ) -> Result<Option<entity::room_image::Model>, DbErr> {
        entity::prelude::RoomImage::find()
            .filter(entity::room_image::Column::Id.eq(image_id))
            .filter(entity::room_image::Column::RoomId.eq(room_id))
            .one(self.db)
            .await
    }

    pub async fn get_features(
        &self,
        room_id: i32,
    ) -> Result<Vec<entity::feature::Model>, DbErr> {
        entity::prelude::Feature::find()
            .filter(entity::feature::Column::RoomId.eq(room_id))
            .order_by_asc(entity::feature::Column::Id)
            .all(self.db)
            .await
    }
}
