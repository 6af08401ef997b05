//! Listening summaries for recaps and command replies.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::data::StatsRepository;
use crate::error::AppError;
use crate::model::{event::iso_week_key, ListeningSummary};

pub struct StatsService {
    db: DatabaseConnection,
}

impl StatsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summary of the last seven days, keyed by the current ISO week.
    pub async fn weekly_summary(&self) -> Result<ListeningSummary, AppError> {
        let now = Utc::now();
        self.summary_since(Some(now - Duration::days(7)), iso_week_key(now))
            .await
    }

    /// All-time summary for the `/stats` reply.
    pub async fn overall_summary(&self) -> Result<ListeningSummary, AppError> {
        self.summary_since(None, iso_week_key(Utc::now())).await
    }

    async fn summary_since(
        &self,
        since: Option<chrono::DateTime<Utc>>,
        iso_week: String,
    ) -> Result<ListeningSummary, AppError> {
        let stats = StatsRepository::new(&self.db);

        let totals = stats.totals(since).await?;
        let top_track = stats.top_tracks(1, since).await?.into_iter().next();
        let top_artist = stats.top_artists(1, since).await?.into_iter().next();

        Ok(ListeningSummary {
            iso_week,
            total_plays: totals.plays,
            total_minutes: totals.minutes,
            distinct_tracks: totals.distinct_tracks,
            distinct_artists: totals.distinct_artists,
            top_track,
            top_artist,
        })
    }
}
