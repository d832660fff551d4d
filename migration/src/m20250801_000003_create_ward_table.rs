use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000002_create_province_table::Province;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ward::Table)
                    .if_not_exists()
                    .col(pk_auto(Ward::Id))
                    .col(string(Ward::Name))
                    .col(json(Ward::MergedFrom))
                    .col(integer(Ward::ProvinceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ward_province_id")
                            .from(Ward::Table, Ward::ProvinceId)
                            .to(Province::Table, Province::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ward {
    Table,
    Id,
    Name,
    MergedFrom,
    ProvinceId,
}
