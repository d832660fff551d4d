use crate::data::hotel::HotelRepository;
use sea_orm::{DbErr, Order};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_best;
mod get_by_province;
