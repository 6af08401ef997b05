use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelConfig::Id))
                    .col(big_integer(ChannelConfig::GuildId))
                    .col(string(ChannelConfig::Kind))
                    .col(big_integer(ChannelConfig::ChannelId))
                    .col(
                        timestamp(ChannelConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One routed channel per kind per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_channel_config_unique")
                    .table(ChannelConfig::Table)
                    .col(ChannelConfig::GuildId)
                    .col(ChannelConfig::Kind)
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
                    .name("idx_channel_config_unique")
                    .table(ChannelConfig::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChannelConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelConfig {
    Table,
    Id,
    GuildId,
    Kind,
    ChannelId,
    UpdatedAt,
}
