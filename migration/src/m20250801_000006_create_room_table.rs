use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000004_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HotelId))
                    .col(string(Room::RoomType))
                    .col(text_null(Room::Description))
                    .col(decimal_len(Room::Price, 16, 2))
                    .col(integer(Room::MaxAdults).default(1))
                    .col(integer(Room::MaxChildren).default(0))
                    .col(integer(Room::BedCount).default(1))
                    .col(integer(Room::BathroomCount).default(1))
                    .col(boolean(Room::Available).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel_id")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HotelId,
    RoomType,
    Description,
    Price,
    MaxAdults,
    MaxChildren,
    BedCount,
    BathroomCount,
    Available,
}
