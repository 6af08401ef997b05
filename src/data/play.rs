//! Listening history writes and per-track lookups.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::{AudioFeatures, NowPlaying};

pub struct PlayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one play of a track in the listening history.
    ///
    /// # Arguments
    /// - `track` - The now-playing snapshot to record
    /// - `genres` - Artist genres, empty if enrichment was unavailable
    /// - `features` - Audio analysis, `None` if enrichment was unavailable
    ///
    /// # Returns
    /// - `Ok(Model)` - The recorded play row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn record(
        &self,
        track: &NowPlaying,
        genres: &[String],
        features: Option<&AudioFeatures>,
    ) -> Result<entity::play::Model, DbErr> {
        let genres = if genres.is_empty() {
            None
        } else {
            Some(genres.join(","))
        };

        let play = entity::play::ActiveModel {
            track_id: ActiveValue::Set(track.track_id.clone()),
            track_name: ActiveValue::Set(track.track_name.clone()),
            artist_id: ActiveValue::Set(track.artist_id.clone()),
            artist_name: ActiveValue::Set(track.artist_name.clone()),
            album_name: ActiveValue::Set(track.album_name.clone()),
            duration_ms: ActiveValue::Set(track.duration_ms),
            image_url: ActiveValue::Set(track.image_url.clone()),
            genres: ActiveValue::Set(genres),
            valence: ActiveValue::Set(features.map(|f| f.valence)),
            energy: ActiveValue::Set(features.map(|f| f.energy)),
            danceability: ActiveValue::Set(features.map(|f| f.danceability)),
            played_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(play)
    }

    /// Lifetime number of recorded plays for a track.
    pub async fn play_count(&self, track_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Play::find()
            .filter(entity::play::Column::TrackId.eq(track_id))
            .count(self.db)
            .await
    }
}
