use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::user::{UpdateProfileParams, UserRepository},
    error::AppError,
    model::user::{UpdateProfileDto, UserDto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a partial profile update for the authenticated user.
    ///
    /// A changed phone number must still look like a Vietnamese mobile
    /// number (400) and must not belong to another account (409).
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        dto: UpdateProfileDto,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = HashMap::new();
        let mut conflicts = HashMap::new();

        if let Some(full_name) = dto.full_name.as_deref() {
            if full_name.trim().is_empty() {
                errors.insert("fullName".to_string(), "Full name is required".to_string());
            }
        }

        if let Some(phone_number) = dto.phone_number.as_deref() {
            if !crate::service::auth::is_valid_phone(phone_number) {
                errors.insert(
                    "phoneNumber".to_string(),
                    "Invalid phone number format".to_string(),
                );
            } else if repo.phone_taken_by_other(phone_number, user.id).await? {
                conflicts.insert(
                    "phoneNumber".to_string(),
                    "Phone number is already registered".to_string(),
                );
            }
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        if !conflicts.is_empty() {
            return Err(AppError::Conflict(conflicts));
        }

        let updated = repo
            .update_profile(
                user,
                UpdateProfileParams {
                    full_name: dto.full_name,
                    phone_number: dto.phone_number,
                    gender: dto.gender,
                    avatar: dto.avatar,
                    date_of_birth: dto.date_of_birth,
                },
            )
            .await?;

        Ok(updated.into())
    }
}
