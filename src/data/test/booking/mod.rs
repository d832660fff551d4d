use crate::data::booking::{BookingRepository, CreateBookingParams};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;
