use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackedState::Table)
                    .if_not_exists()
                    .col(string(TrackedState::EntityKey).primary_key())
                    .col(string(TrackedState::LastValue))
                    .col(
                        timestamp(TrackedState::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackedState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackedState {
    Table,
    EntityKey,
    LastValue,
    UpdatedAt,
}
