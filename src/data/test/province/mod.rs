use crate::data::province::{NewWard, ProvinceRepository, UpsertProvinceParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
