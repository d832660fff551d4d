use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct CreateUserParams {
    pub full_name: String,
    pub email: String,
    /// Bcrypt hash, never the raw password.
    pub password: String,
    pub phone_number: String,
    pub gender: bool,
    pub avatar: Option<String>,
    pub date_of_birth: NaiveDate,
}

pub struct UpdateProfileParams {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<bool>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unverified user account.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            phone_number: ActiveValue::Set(params.phone_number),
            gender: ActiveValue::Set(params.gender),
            avatar: ActiveValue::Set(params.avatar),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks phone uniqueness while ignoring the user's own row, for
    /// profile updates that resubmit the current number.
    pub async fn phone_taken_by_other(
        &self,
        phone_number: &str,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided profile fields, leaving absent ones unchanged.
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone_number) = params.phone_number {
            active.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(gender) = params.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(avatar) = params.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active.date_of_birth = ActiveValue::Set(date_of_birth);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Marks the account as verified after a successful registration OTP.
    pub async fn mark_verified(
        &self,
        user: entity::user::Model,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.verified = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Replaces the stored password hash after a completed reset flow.
    pub async fn update_password(
        &self,
        user: entity::user::Model,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.password = ActiveValue::Set(password_hash);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
