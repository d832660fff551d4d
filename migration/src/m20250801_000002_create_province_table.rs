use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Province::Table)
                    .if_not_exists()
                    // Ids come from the external province API, no auto-increment.
                    .col(integer(Province::Id).primary_key())
                    .col(string(Province::ProvinceName))
                    .col(string_null(Province::ImageUrl))
                    .col(json(Province::LicensePlates))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Province::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Province {
    Table,
    Id,
    ProvinceName,
    ImageUrl,
    LicensePlates,
}
