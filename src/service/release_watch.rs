//! Release pipeline: poll each followed artist's feed for fresh releases.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::{CommitOutcome, FollowedArtistRepository, SeenEventRepository};
use crate::detector::FeedDetector;
use crate::error::AppError;
use crate::model::DomainEvent;
use crate::provider::SpotifySource;
use crate::service::PollCycle;

/// Releases older than this are history, not news.
const RECENCY_DAYS: i64 = 7;

pub struct ReleaseWatchService {
    db: DatabaseConnection,
    spotify: Arc<dyn SpotifySource>,
}

impl ReleaseWatchService {
    pub fn new(db: DatabaseConnection, spotify: Arc<dyn SpotifySource>) -> Self {
        Self { db, spotify }
    }
}

#[async_trait]
impl PollCycle for ReleaseWatchService {
    fn name(&self) -> &'static str {
        "release_watch"
    }

    /// One sweep over the followed-artist roster.
    ///
    /// An artist whose feed is unavailable is skipped without being marked
    /// checked; the next sweep tries again. Several new releases in one
    /// sweep each become their own event, in feed order.
    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError> {
        let artists = FollowedArtistRepository::new(&self.db);
        let gate = SeenEventRepository::new(&self.db);
        let detector = FeedDetector::new(&self.db);
        let now = Utc::now();

        let mut events = Vec::new();

        for artist in artists.list().await? {
            let Some(releases) = self.spotify.latest_releases(&artist.artist_id).await else {
                continue;
            };

            let recent: Vec<_> = releases
                .into_iter()
                .filter(|release| release.released_within_days(RECENCY_DAYS, now))
                .collect();

            let novel = detector
                .filter_novel("release_detected", recent, |release| {
                    release.release_id.clone()
                })
                .await?;

            let mut newest_release_id = None;

            for release in novel {
                let event = DomainEvent::ReleaseDetected {
                    artist_name: artist.artist_name.clone(),
                    release,
                };

                if gate.commit(&event).await? == CommitOutcome::Accepted {
                    if let DomainEvent::ReleaseDetected { release, .. } = &event {
                        newest_release_id = Some(release.release_id.clone());
                    }
                    events.push(event);
                }
            }

            artists
                .touch_checked(&artist.artist_id, newest_release_id.as_deref())
                .await?;
        }

        Ok(events)
    }
}
