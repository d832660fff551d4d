use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::password_reset_token::OtpPurpose;

pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a freshly issued code. Older codes for the same email and
    /// purpose stay in place; only the latest one is honored on lookup.
    pub async fn create(
        &self,
        email: &str,
        otp: &str,
        purpose: OtpPurpose,
        expired_at: DateTime<Utc>,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            otp: ActiveValue::Set(otp.to_string()),
            purpose: ActiveValue::Set(purpose),
            expired_at: ActiveValue::Set(expired_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the most recently issued code for an email and purpose.
    pub async fn find_latest(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<entity::password_reset_token::Model>, DbErr> {
        entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::Email.eq(email))
            .filter(entity::password_reset_token::Column::Purpose.eq(purpose))
            .order_by_desc(entity::password_reset_token::Column::Id)
            .one(self.db)
            .await
    }

    /// Removes every code for an email and purpose once one is consumed.
    pub async fn delete_for(&self, email: &str, purpose: OtpPurpose) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetToken::delete_many()
            .filter(entity::password_reset_token::Column::Email.eq(email))
            .filter(entity::password_reset_token::Column::Purpose.eq(purpose))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
