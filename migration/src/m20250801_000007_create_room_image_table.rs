use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000006_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomImage::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomImage::Id))
                    .col(integer(RoomImage::RoomId))
                    .col(string(RoomImage::ImageUrl))
                    .col(string(RoomImage::Size))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_image_room_id")
                            .from(RoomImage::Table, RoomImage::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomImage {
    Table,
    Id,
    RoomId,
    ImageUrl,
    Size,
}
