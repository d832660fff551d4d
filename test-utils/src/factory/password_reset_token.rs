//! One-time code factory for auth flow tests.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an OTP token for the given email and purpose.
///
/// The token expires `minutes_until_expiry` minutes from now; pass a
/// negative value to create an already-expired token.
pub async fn create_otp_token(
    db: &DatabaseConnection,
    email: impl Into<String>,
    otp: impl Into<String>,
    purpose: entity::password_reset_token::OtpPurpose,
    minutes_until_expiry: i64,
) -> Result<entity::password_reset_token::Model, DbErr> {
    entity::password_reset_token::ActiveModel {
        email: ActiveValue::Set(email.into()),
        otp: ActiveValue::Set(otp.into()),
        purpose: ActiveValue::Set(purpose),
        expired_at: ActiveValue::Set(Utc::now() + Duration::minutes(minutes_until_expiry)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
