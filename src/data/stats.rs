//! Aggregate queries over the listening history.
//!
//! Cumulative statistics are always derived from the play table at query
//! time; nothing here is cached or denormalized.

use chrono::{DateTime, Utc};
use migration::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::TopEntry;

/// Totals over the play table, optionally restricted to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub plays: i64,
    pub minutes: i64,
    pub distinct_tracks: i64,
    pub distinct_artists: i64,
}

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Play, listening-time, and distinct counts, optionally since a cutoff.
    pub async fn totals(&self, since: Option<DateTime<Utc>>) -> Result<Totals, DbErr> {
        let mut query = entity::prelude::Play::find()
            .select_only()
            .column_as(entity::play::Column::Id.count(), "plays")
            .column_as(entity::play::Column::DurationMs.sum(), "total_ms")
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col((
                    entity::play::Entity,
                    entity::play::Column::TrackId,
                )))),
                "distinct_tracks",
            )
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col((
                    entity::play::Entity,
                    entity::play::Column::ArtistName,
                )))),
                "distinct_artists",
            );

        if let Some(since) = since {
            query = query.filter(entity::play::Column::PlayedAt.gte(since));
        }

        let row: Option<(i64, Option<i64>, i64, i64)> = query.into_tuple().one(self.db).await?;
        let (plays, total_ms, distinct_tracks, distinct_artists) = row.unwrap_or((0, None, 0, 0));

        Ok(Totals {
            plays,
            minutes: total_ms.unwrap_or(0) / 60_000,
            distinct_tracks,
            distinct_artists,
        })
    }

    /// Most-played tracks, optionally since a cutoff.
    pub async fn top_tracks(
        &self,
        limit: u64,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<TopEntry>, DbErr> {
        let mut query = entity::prelude::Play::find()
            .select_only()
            .column(entity::play::Column::TrackName)
            .column(entity::play::Column::ArtistName)
            .column_as(entity::play::Column::Id.count(), "plays")
            .group_by(entity::play::Column::TrackId)
            .group_by(entity::play::Column::TrackName)
            .group_by(entity::play::Column::ArtistName)
            .order_by_desc(entity::play::Column::Id.count())
            .limit(limit);

        if let Some(since) = since {
            query = query.filter(entity::play::Column::PlayedAt.gte(since));
        }

        let rows: Vec<(String, String, i64)> = query.into_tuple().all(self.db).await?;

        Ok(rows
            .into_iter()
            .map(|(name, artist, plays)| TopEntry {
                name,
                detail: Some(artist),
                plays,
            })
            .collect())
    }

    /// Most-played artists, optionally since a cutoff.
    pub async fn top_artists(
        &self,
        limit: u64,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<TopEntry>, DbErr> {
        let mut query = entity::prelude::Play::find()
            .select_only()
            .column(entity::play::Column::ArtistName)
            .column_as(entity::play::Column::Id.count(), "plays")
            .group_by(entity::play::Column::ArtistName)
            .order_by_desc(entity::play::Column::Id.count())
            .limit(limit);

        if let Some(since) = since {
            query = query.filter(entity::play::Column::PlayedAt.gte(since));
        }

        let rows: Vec<(String, i64)> = query.into_tuple().all(self.db).await?;

        Ok(rows
            .into_iter()
            .map(|(name, plays)| TopEntry {
                name,
                detail: None,
                plays,
            })
            .collect())
    }
}
