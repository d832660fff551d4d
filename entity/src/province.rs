use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "province")]
pub struct Model {
    /// Id assigned by the external province API, not auto-generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub province_name: String,
    pub image_url: Option<String>,
    /// Vehicle license plate prefixes, stored as a JSON string array.
    pub license_plates: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ward::Entity")]
    Ward,
    #[sea_orm(has_many = "super::hotel::Entity")]
    Hotel,
}

impl Related<super::ward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ward.def()
    }
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
