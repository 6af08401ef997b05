use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Play::Table)
                    .if_not_exists()
                    .col(pk_auto(Play::Id))
                    .col(string(Play::TrackId))
                    .col(string(Play::TrackName))
                    .col(string_null(Play::ArtistId))
                    .col(string(Play::ArtistName))
                    .col(string_null(Play::AlbumName))
                    .col(integer(Play::DurationMs))
                    .col(string_null(Play::ImageUrl))
                    .col(string_null(Play::Genres))
                    .col(double_null(Play::Valence))
                    .col(double_null(Play::Energy))
                    .col(double_null(Play::Danceability))
                    .col(
                        timestamp(Play::PlayedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Play-count lookups per track
        manager
            .create_index(
                Index::create()
                    .name("idx_play_track_id")
                    .table(Play::Table)
                    .col(Play::TrackId)
                    .to_owned(),
            )
            .await?;

        // Period-windowed aggregates (weekly recap, /top, /stats)
        manager
            .create_index(
                Index::create()
                    .name("idx_play_played_at")
                    .table(Play::Table)
                    .col(Play::PlayedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_play_played_at")
                    .table(Play::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_play_track_id")
                    .table(Play::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Play::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Play {
    Table,
    Id,
    TrackId,
    TrackName,
    ArtistId,
    ArtistName,
    AlbumName,
    DurationMs,
    ImageUrl,
    Genres,
    Valence,
    Energy,
    Danceability,
    PlayedAt,
}
