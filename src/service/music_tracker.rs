//! Now-playing pipeline: poll Spotify, detect track changes, record plays.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::{CommitOutcome, PlayRepository, SeenEventRepository};
use crate::detector::TrackChangeDetector;
use crate::error::AppError;
use crate::model::DomainEvent;
use crate::provider::SpotifySource;
use crate::service::PollCycle;

pub struct MusicTrackerService {
    db: DatabaseConnection,
    spotify: Arc<dyn SpotifySource>,
    detector: TrackChangeDetector,
}

impl MusicTrackerService {
    pub fn new(db: DatabaseConnection, spotify: Arc<dyn SpotifySource>) -> Self {
        Self {
            db,
            spotify,
            detector: TrackChangeDetector::new(),
        }
    }
}

#[async_trait]
impl PollCycle for MusicTrackerService {
    fn name(&self) -> &'static str {
        "music_tracker"
    }

    /// One poll of the player.
    ///
    /// An unavailable provider is not a change: the cycle ends without
    /// touching the store. On a genuine track change the gate key is
    /// claimed first; only the winning cycle records the play and returns
    /// the event, so racing pollers produce one announcement and one
    /// history row.
    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError> {
        let Some(track) = self.spotify.now_playing().await else {
            return Ok(vec![]);
        };

        if !self.detector.detect(&self.db, &track.track_id).await? {
            return Ok(vec![]);
        }

        let started_at = Utc::now();
        let key = format!("{}:{}", track.track_id, started_at.timestamp() / 60);
        let outcome = SeenEventRepository::new(&self.db)
            .commit_key("track_started", &key)
            .await?;

        if outcome == CommitOutcome::AlreadyRecorded {
            return Ok(vec![]);
        }

        // Enrichment is best-effort; a missing genre list or feature set
        // never blocks the play from being recorded.
        let genres = match &track.artist_id {
            Some(artist_id) => self
                .spotify
                .artist_genres(artist_id)
                .await
                .unwrap_or_default(),
            None => vec![],
        };
        let features = self.spotify.audio_features(&track.track_id).await;

        let plays = PlayRepository::new(&self.db);
        plays.record(&track, &genres, features.as_ref()).await?;
        let play_count = plays.play_count(&track.track_id).await?;

        Ok(vec![DomainEvent::TrackStarted {
            track,
            genres,
            play_count,
            started_at,
        }])
    }
}
