use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Counter::Table)
                    .if_not_exists()
                    .col(string(Counter::Name).primary_key())
                    .col(big_integer(Counter::Value))
                    .col(
                        timestamp(Counter::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Counter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Counter {
    Table,
    Name,
    Value,
    UpdatedAt,
}
