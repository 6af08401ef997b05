use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeenEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(SeenEvent::Id))
                    .col(string(SeenEvent::EventType))
                    .col(string(SeenEvent::NaturalKey))
                    .col(
                        timestamp(SeenEvent::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The at-most-once dispatch guarantee lives in this index: the gate's
        // insert either lands or conflicts, there is no read-then-write window.
        manager
            .create_index(
                Index::create()
                    .name("idx_seen_event_unique")
                    .table(SeenEvent::Table)
                    .col(SeenEvent::EventType)
                    .col(SeenEvent::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_seen_event_unique")
                    .table(SeenEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeenEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeenEvent {
    Table,
    Id,
    EventType,
    NaturalKey,
    RecordedAt,
}
