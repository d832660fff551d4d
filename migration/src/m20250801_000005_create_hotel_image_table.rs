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
                    .table(HotelImage::Table)
                    .if_not_exists()
                    .col(pk_auto(HotelImage::Id))
                    .col(integer(HotelImage::HotelId))
                    .col(string(HotelImage::ImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_image_hotel_id")
                            .from(HotelImage::Table, HotelImage::HotelId)
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
            .drop_table(Table::drop().table(HotelImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelImage {
    Table,
    Id,
    HotelId,
    ImageUrl,
}
