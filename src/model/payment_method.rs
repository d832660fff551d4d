//! Payment method DTO.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<entity::payment_method::Model> for PaymentMethodDto {
    fn from(method: entity::payment_method::Model) -> Self {
        Self {
            id: method.id,
            code: method.code,
            name: method.name,
            image_url: method.image_url,
        }
    }
}
