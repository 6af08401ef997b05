//! Bot presence line, refreshed periodically from the player and the stats.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::data::StatsRepository;
use crate::provider::SpotifySource;

pub struct PresenceService {
    db: DatabaseConnection,
    spotify: Arc<dyn SpotifySource>,
}

impl PresenceService {
    pub fn new(db: DatabaseConnection, spotify: Arc<dyn SpotifySource>) -> Self {
        Self { db, spotify }
    }

    /// Text for the "Listening to ..." activity. Falls back to an all-time
    /// figure when nothing is playing, and to a plain tagline when even the
    /// store is unreachable; presence is cosmetic and never fails loudly.
    pub async fn status_line(&self) -> String {
        if let Some(track) = self.spotify.now_playing().await {
            return format!("{} \u{2013} {}", track.artist_name, track.track_name);
        }

        match StatsRepository::new(&self.db).totals(None).await {
            Ok(totals) => format!("{}h of music", totals.minutes / 60),
            Err(err) => {
                tracing::debug!("presence stats unavailable: {err}");
                "the quiet between songs".to_string()
            }
        }
    }
}
