use crate::data::otp::OtpRepository;
use chrono::{Duration, Utc};
use entity::password_reset_token::OtpPurpose;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_latest;
