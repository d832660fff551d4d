use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets hotels with their provinces.
    ///
    /// An absent province filter matches every hotel. With a name order the
    /// listing sorts case-insensitively on the hotel name, otherwise by id.
    pub async fn get_all(
        &self,
        province_id: Option<i32>,
        name_order: Option<Order>,
    ) -> Result<Vec<(entity::hotel::Model, Option<entity::province::Model>)>, DbErr> {
        let mut query = entity::prelude::Hotel::find()
            .find_also_related(entity::prelude::Province);

        if let Some(province_id) = province_id {
            query = query.filter(entity::hotel::Column::ProvinceId.eq(province_id));
        }

        let query = match name_order {
            Some(order) => query.order_by(
                Expr::expr(Func::lower(Expr::col((
                    entity::hotel::Entity,
                    entity::hotel::Column::HotelName,
                )))),
                order,
            ),
            None => query.order_by_asc(entity::hotel::Column::Id),
        };

        query.all(self.db).await
    }

    /// Gets the top rated hotels, highest star rating first.
    ///
    /// Unrated hotels sort last. Ties break on id so the order is stable.
    pub async fn get_best(
        &self,
        limit: u64,
    ) -> Result<Vec<(entity::hotel::Model, Option<entity::province::Model>)>, DbErr> {
        entity::prelude::Hotel::find()
            .find_also_related(entity::prelude::Province)
            .order_by_desc(entity::hotel::Column::StarRating)
            .order_by_asc(entity::hotel::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn get_by_province(
        &self,
        province_id: i32,
    ) -> Result<Vec<(entity::hotel::Model, Option<entity::province::Model>)>, DbErr> {
        entity::prelude::Hotel::find()
            .find_also_related(entity::prelude::Province)
            .filter(entity::hotel::Column::ProvinceId.eq(province_id))
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::hotel::Model, Option<entity::province::Model>)>, DbErr> {
        let results = entity::prelude::Hotel::find()
            .find_also_related(entity::prelude::Province)
            .filter(entity::hotel::Column::Id.eq(id))
            .all(self.db)
            .await?;

        Ok(results.into_iter().next())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Hotel::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets the first image attached to a hotel, by insertion order.
    pub async fn first_image(
        &self,
        hotel_id: i32,
    ) -> Result<Option<entity::hotel_image::Model>, DbErr> {
        entity::prelude::HotelImage::find()
            .filter(entity::hotel_image::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::hotel_image::Column::Id)
            .one(self.db)
            .await
    }
}
