use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct PaymentMethodRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentMethodRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::payment_method::Model>, DbErr> {
        entity::prelude::PaymentMethod::find()
            .order_by_asc(entity::payment_method::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::payment_method::Model>, DbErr> {
        entity::prelude::PaymentMethod::find_by_id(id).one(self.db).await
    }
}
