use sea_orm::DatabaseConnection;

use crate::{
    data::payment_method::PaymentMethodRepository,
    error::AppError,
    model::payment_method::PaymentMethodDto,
};

pub struct PaymentMethodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentMethodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PaymentMethodDto>, AppError> {
        let methods = PaymentMethodRepository::new(self.db).get_all().await?;

        Ok(methods.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PaymentMethodDto, AppError> {
        PaymentMethodRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Payment method not found".to_string()))
    }
}
