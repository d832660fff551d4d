use chrono::{Duration, Utc};
use rand::Rng;
use regex::Regex;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::LazyLock;

use entity::password_reset_token::OtpPurpose;

use crate::{
    data::{
        otp::OtpRepository,
        user::{CreateUserParams, UserRepository},
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginDto, LoginResponseDto, RegisterDto, ResetPasswordDto, VerifyAccountDto},
        user::UserDto,
    },
    service::{email::EmailService, jwt::JwtProvider},
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

// Vietnamese mobile numbers: local 0x or international +84x prefix
// followed by a carrier digit (3, 5, 7, 8, 9) and eight digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0(3|5|7|8|9)\d{8}|\+84(3|5|7|8|9)\d{8})$").expect("valid phone pattern")
});

const OTP_TTL_MINUTES: i64 = 10;
const MIN_PASSWORD_LEN: usize = 8;
const DEFAULT_AVATAR_URL: &str = "https://cdn.stayhub.app/avatars/default.png";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtProvider,
    mailer: &'a EmailService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtProvider, mailer: &'a EmailService) -> Self {
        Self { db, jwt, mailer }
    }

    /// Registers a new account and emails a verification code.
    ///
    /// Validation failures are collected per field so the client can show
    /// every problem at once instead of fixing them one request at a time.
    /// Format problems come back as a 400 validation map; already-taken
    /// email or phone values come back as a 409 conflict map.
    /// The account starts unverified and cannot log in until the OTP sent
    /// to its email is confirmed.
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = HashMap::new();
        let mut conflicts = HashMap::new();

        if dto.full_name.trim().is_empty() {
            errors.insert("fullName".to_string(), "Full name is required".to_string());
        }

        if !EMAIL_RE.is_match(&dto.email) {
            errors.insert("email".to_string(), "Invalid email format".to_string());
        } else if repo.exists_by_email(&dto.email).await? {
            conflicts.insert("email".to_string(), "Email is already registered".to_string());
        }

        if !PHONE_RE.is_match(&dto.phone_number) {
            errors.insert(
                "phoneNumber".to_string(),
                "Invalid phone number format".to_string(),
            );
        } else if repo.exists_by_phone_number(&dto.phone_number).await? {
            conflicts.insert(
                "phoneNumber".to_string(),
                "Phone number is already registered".to_string(),
            );
        }

        if dto.password.len() < MIN_PASSWORD_LEN {
            errors.insert(
                "password".to_string(),
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        if !conflicts.is_empty() {
            return Err(AppError::Conflict(conflicts));
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;

        let user = repo
            .create(CreateUserParams {
                full_name: dto.full_name,
                email: dto.email,
                password: password_hash,
                phone_number: dto.phone_number,
                gender: dto.gender,
                avatar: dto.avatar.or_else(|| Some(DEFAULT_AVATAR_URL.to_string())),
                date_of_birth: dto.date_of_birth,
            })
            .await?;

        self.issue_otp(&user.email, OtpPurpose::Register, "Verify your StayHub account")
            .await?;

        Ok(user.into())
    }

    /// Authenticates a user and issues a bearer token.
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe which addresses have accounts. Unverified accounts are
    /// rejected only after the password checks out.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&dto.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.verified {
            return Err(AuthError::AccountNotVerified.into());
        }

        let token = self.jwt.generate(&user.email)?;

        Ok(LoginResponseDto {
            token,
            user: user.into(),
        })
    }

    /// Confirms a registration OTP and marks the account verified.
    pub async fn verify_account(&self, dto: VerifyAccountDto) -> Result<UserDto, AppError> {
        self.consume_otp(&dto.email, &dto.otp, OtpPurpose::Register)
            .await?;

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let user = repo.mark_verified(user).await?;

        Ok(user.into())
    }

    /// Starts the password reset flow by emailing a fresh OTP.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(email).await?.is_none() {
            return Err(AppError::NotFound("Email is not registered".to_string()));
        }

        self.issue_otp(email, OtpPurpose::ResetPassword, "Reset your StayHub password")
            .await
    }

    /// Completes the password reset flow against the latest OTP.
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<(), AppError> {
        if dto.new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::field(
                "newPassword",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        self.consume_otp(&dto.email, &dto.otp, OtpPurpose::ResetPassword)
            .await?;

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let password_hash = bcrypt::hash(&dto.new_password, bcrypt::DEFAULT_COST)?;
        repo.update_password(user, password_hash).await?;

        Ok(())
    }

    /// Generates a six digit code, stores it and mails it out.
    async fn issue_otp(
        &self,
        email: &str,
        purpose: OtpPurpose,
        subject: &str,
    ) -> Result<(), AppError> {
        let otp = generate_otp();
        let expired_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        OtpRepository::new(self.db)
            .create(email, &otp, purpose, expired_at)
            .await?;

        self.mailer.send_detached(
            email.to_string(),
            subject.to_string(),
            format!(
                "Your verification code is {}. It expires in {} minutes.",
                otp, OTP_TTL_MINUTES
            ),
        );

        Ok(())
    }

    /// Checks a submitted code against the latest one issued for the email
    /// and purpose, then deletes every code for that pair.
    ///
    /// Only the newest code is honored; requesting a fresh code invalidates
    /// older emails that may still be in the inbox.
    async fn consume_otp(
        &self,
        email: &str,
        otp: &str,
        purpose: OtpPurpose,
    ) -> Result<(), AppError> {
        let repo = OtpRepository::new(self.db);

        let Some(token) = repo.find_latest(email, purpose).await? else {
            return Err(AuthError::OtpInvalid.into());
        };

        if token.otp != otp {
            return Err(AuthError::OtpInvalid.into());
        }

        if token.expired_at < Utc::now() {
            return Err(AuthError::OtpExpired.into());
        }

        repo.delete_for(email, purpose).await?;

        Ok(())
    }
}

fn generate_otp() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000))
}

/// Checks a Vietnamese mobile number format. Shared with profile updates.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
