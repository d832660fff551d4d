use sea_orm::DatabaseConnection;

use crate::{
    data::province::{NewWard, ProvinceRepository, UpsertProvinceParams},
    error::AppError,
    model::province::{ImportSummaryDto, ProvinceDto, ProvinceFeed, WardDto},
};

pub struct ProvinceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProvinceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ProvinceDto>, AppError> {
        let provinces = ProvinceRepository::new(self.db).get_all().await?;

        Ok(provinces.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ProvinceDto, AppError> {
        ProvinceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Province not found".to_string()))
    }

    pub async fn get_wards(&self, province_id: i32) -> Result<Vec<WardDto>, AppError> {
        let repo = ProvinceRepository::new(self.db);

        if repo.find_by_id(province_id).await?.is_none() {
            return Err(AppError::NotFound("Province not found".to_string()));
        }

        let wards = repo.get_wards(province_id).await?;

        Ok(wards.into_iter().map(Into::into).collect())
    }

    /// Imports the national province and ward list from the external feed.
    ///
    /// Provinces are upserted by id so repeated runs converge, and each
    /// province's ward list is replaced wholesale. Feed entries with an
    /// unparsable id are skipped and logged rather than failing the run.
    pub async fn import(
        &self,
        http_client: &reqwest::Client,
        feed_url: &str,
    ) -> Result<ImportSummaryDto, AppError> {
        let feed: ProvinceFeed = http_client
            .get(feed_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let repo = ProvinceRepository::new(self.db);

        let mut provinces = 0;
        let mut wards = 0;

        for item in feed.data {
            let id: i32 = match item.id.trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    tracing::warn!(
                        "Skipping province {} with non-numeric id {}",
                        item.province_name,
                        item.id
                    );
                    continue;
                }
            };

            repo.upsert(UpsertProvinceParams {
                id,
                province_name: item.province_name,
                license_plates: normalize_json(item.license_plates),
            })
            .await?;
            provinces += 1;

            let new_wards = item
                .wards
                .into_iter()
                .map(|ward| NewWard {
                    name: ward.name,
                    merged_from: normalize_json(ward.merged_from),
                })
                .collect();
            wards += repo.replace_wards(id, new_wards).await?;
        }

        tracing::info!("Imported {} provinces and {} wards", provinces, wards);

        Ok(ImportSummaryDto { provinces, wards })
    }
}

/// The feed leaves absent arrays as null; store an empty array instead.
fn normalize_json(value: serde_json::Value) -> serde_json::Value {
    if value.is_null() {
        serde_json::json!([])
    } else {
        value
    }
}
