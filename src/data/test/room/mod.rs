use crate::data::room::{RoomRepository, RoomSearchFilter};
use rust_decimal::Decimal;
use sea_orm::{DbErr, Order};
use test_utils::{builder::TestBuilder, factory};

mod get_by_hotel;
mod images;
mod search;
