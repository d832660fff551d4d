use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentMethod::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentMethod::Id))
                    .col(string_uniq(PaymentMethod::Code))
                    .col(string(PaymentMethod::Name))
                    .col(string_null(PaymentMethod::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentMethod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentMethod {
    Table,
    Id,
    Code,
    Name,
    ImageUrl,
}
