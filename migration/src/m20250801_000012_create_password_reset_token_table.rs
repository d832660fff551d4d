use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PasswordResetToken::Table)
                    .if_not_exists()
                    .col(pk_auto(PasswordResetToken::Id))
                    .col(string(PasswordResetToken::Email))
                    .col(string_len(PasswordResetToken::Otp, 6))
                    .col(string_len(PasswordResetToken::Purpose, 32))
                    .col(timestamp(PasswordResetToken::ExpiredAt))
                    .col(
                        timestamp(PasswordResetToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordResetToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PasswordResetToken {
    Table,
    Id,
    Email,
    Otp,
    Purpose,
    CreatedAt,
    ExpiredAt,
}
