use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct UpsertProvinceParams {
    pub id: i32,
    pub province_name: String,
    pub license_plates: serde_json::Value,
}

pub struct NewWard {
    pub name: String,
    pub merged_from: serde_json::Value,
}

pub struct ProvinceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProvinceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::province::Model>, DbErr> {
        entity::prelude::Province::find()
            .order_by_asc(entity::province::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::province::Model>, DbErr> {
        entity::prelude::Province::find_by_id(id).one(self.db).await
    }

    pub async fn get_wards(&self, province_id: i32) -> Result<Vec<entity::ward::Model>, DbErr> {
        entity::prelude::Ward::find()
            .filter(entity::ward::Column::ProvinceId.eq(province_id))
            .order_by_asc(entity::ward::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts a province or updates its name and license plates when the id
    /// already exists. Import runs are idempotent because of this.
    pub async fn upsert(&self, params: UpsertProvinceParams) -> Result<(), DbErr> {
        let active = entity::province::ActiveModel {
            id: ActiveValue::Set(params.id),
            province_name: ActiveValue::Set(params.province_name),
            image_url: ActiveValue::NotSet,
            license_plates: ActiveValue::Set(params.license_plates),
        };

        entity::prelude::Province::insert(active)
            .on_conflict(
                OnConflict::column(entity::province::Column::Id)
                    .update_columns([
                        entity::province::Column::ProvinceName,
                        entity::province::Column::LicensePlates,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the ward list of a province with the given set.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of wards inserted
    /// - `Err(DbErr)`: Database error
    pub async fn replace_wards(
        &self,
        province_id: i32,
        wards: Vec<NewWard>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Ward::delete_many()
            .filter(entity::ward::Column::ProvinceId.eq(province_id))
            .exec(self.db)
            .await?;

        if wards.is_empty() {
            return Ok(0);
        }

        let count = wards.len() as u64;
        let models = wards.into_iter().map(|ward| entity::ward::ActiveModel {
            name: ActiveValue::Set(ward.name),
            merged_from: ActiveValue::Set(ward.merged_from),
            province_id: ActiveValue::Set(province_id),
            ..Default::default()
        });

        entity::prelude::Ward::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }
}
