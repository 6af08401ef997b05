//! Single-value change detection for the currently playing track.
//!
//! Novelty is identity-based: a snapshot is a change when its track id
//! differs from the last known one. Position, progress, and repeated
//! snapshots of the same play are not changes. The last known id lives in
//! the tracked_state table; the in-memory copy is only a fast cache and is
//! reconciled from the store before the first comparison after a restart.

use sea_orm::{DatabaseConnection, DbErr};

use crate::data::TrackedStateRepository;

const CURRENT_TRACK_KEY: &str = "current_track";

pub struct TrackChangeDetector {
    last_track_id: Option<String>,
}

impl TrackChangeDetector {
    pub fn new() -> Self {
        Self {
            last_track_id: None,
        }
    }

    /// Compares a snapshot against the last known track.
    ///
    /// On a change the durable last-known value is advanced before
    /// returning; whether the change gets announced is still the gate's
    /// decision, so a crash between this write and dispatch loses nothing
    /// but one notification candidate.
    ///
    /// # Returns
    /// - `Ok(true)` - The track changed
    /// - `Ok(false)` - Same track as before
    /// - `Err(DbErr)` - Store unavailable; the caller abandons the cycle
    pub async fn detect(&mut self, db: &DatabaseConnection, track_id: &str) -> Result<bool, DbErr> {
        let repo = TrackedStateRepository::new(db);

        if self.last_track_id.is_none() {
            self.last_track_id = repo.get(CURRENT_TRACK_KEY).await?;
        }

        if self.last_track_id.as_deref() == Some(track_id) {
            return Ok(false);
        }

        repo.set(CURRENT_TRACK_KEY, track_id).await?;
        self.last_track_id = Some(track_id.to_string());

        Ok(true)
    }
}

impl Default for TrackChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}
