use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FollowedArtist::Table)
                    .if_not_exists()
                    .col(string(FollowedArtist::ArtistId).primary_key())
                    .col(string(FollowedArtist::ArtistName))
                    .col(timestamp_null(FollowedArtist::LastChecked))
                    .col(string_null(FollowedArtist::LastReleaseId))
                    .col(
                        timestamp(FollowedArtist::FollowedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FollowedArtist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FollowedArtist {
    Table,
    ArtistId,
    ArtistName,
    LastChecked,
    LastReleaseId,
    FollowedAt,
}
