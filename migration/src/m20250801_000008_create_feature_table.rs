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
                    .table(Feature::Table)
                    .if_not_exists()
                    .col(pk_auto(Feature::Id))
                    .col(integer(Feature::RoomId))
                    .col(string(Feature::Title))
                    .col(string(Feature::IconName))
                    .col(text_null(Feature::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feature_room_id")
                            .from(Feature::Table, Feature::RoomId)
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
            .drop_table(Table::drop().table(Feature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feature {
    Table,
    Id,
    RoomId,
    Title,
    IconName,
    Description,
}
