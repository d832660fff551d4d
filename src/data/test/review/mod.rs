use crate::data::review::{CreateReviewParams, ReviewRepository};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_room;
