//! Point-in-time snapshots returned by the external providers.
//!
//! These are provider-shaped facts, not events: a snapshot says what is true
//! right now, and the detectors decide whether that constitutes a change
//! worth announcing.

use chrono::{DateTime, NaiveDate, Utc};

/// The track currently playing on the watched Spotify account.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub track_id: String,
    pub track_name: String,
    pub artist_id: Option<String>,
    pub artist_name: String,
    pub album_name: Option<String>,
    pub duration_ms: i32,
    pub image_url: Option<String>,
    pub spotify_url: Option<String>,
}

/// Audio analysis attributes for a track. Best-effort enrichment; a missing
/// value never blocks a play from being recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFeatures {
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
}

/// An artist as returned by the Spotify search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// One album or single from an artist's release feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseItem {
    pub release_id: String,
    pub name: String,
    pub release_type: String,
    /// Spotify precision varies: `YYYY-MM-DD`, `YYYY-MM`, or `YYYY`.
    pub release_date: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl ReleaseItem {
    /// Whether the release came out within the last `days` days.
    ///
    /// Only full-precision dates qualify; a year-only or month-only date is
    /// too old to matter and is treated as not recent.
    pub fn released_within_days(&self, days: i64, now: DateTime<Utc>) -> bool {
        match NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d") {
            Ok(date) => (now.date_naive() - date).num_days() <= days,
            Err(_) => false,
        }
    }
}

/// A push to one of the watched user's repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct PushEvent {
    /// Provider-assigned identifier, stable across polls.
    pub event_id: String,
    pub repo_name: String,
    pub branch: Option<String>,
    pub commit_messages: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn release(date: &str) -> ReleaseItem {
        ReleaseItem {
            release_id: "r1".to_string(),
            name: "Test".to_string(),
            release_type: "album".to_string(),
            release_date: date.to_string(),
            url: None,
            image_url: None,
        }
    }

    #[test]
    fn recent_release_is_within_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
        assert!(release("2026-08-18").released_within_days(7, now));
        assert!(release("2026-08-20").released_within_days(7, now));
    }

    #[test]
    fn old_release_is_outside_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
        assert!(!release("2026-08-01").released_within_days(7, now));
    }

    #[test]
    fn partial_dates_are_not_recent() {
        let now = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
        assert!(!release("2026").released_within_days(7, now));
        assert!(!release("2026-08").released_within_days(7, now));
    }
}
