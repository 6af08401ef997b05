//! Domain events and their natural keys.
//!
//! Every event names a `(event_type, natural_key)` pair that identifies the
//! real-world occurrence it describes. The idempotency gate stores exactly
//! that pair, so two pollers observing the same occurrence can only ever
//! produce one announcement.

use chrono::{DateTime, Datelike, Utc};

use crate::model::snapshot::{NowPlaying, PushEvent, ReleaseItem};

/// Which configured channel an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Music,
    News,
    Main,
    Coding,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 4] = [
        ChannelKind::Music,
        ChannelKind::News,
        ChannelKind::Main,
        ChannelKind::Coding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Music => "music",
            ChannelKind::News => "news",
            ChannelKind::Main => "main",
            ChannelKind::Coding => "coding",
        }
    }

    pub fn from_str(value: &str) -> Option<ChannelKind> {
        match value {
            "music" => Some(ChannelKind::Music),
            "news" => Some(ChannelKind::News),
            "main" => Some(ChannelKind::Main),
            "coding" => Some(ChannelKind::Coding),
            _ => None,
        }
    }
}

/// A cumulative listening statistic tracked against fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    ListeningHours,
    TracksPlayed,
    DistinctArtists,
}

impl MilestoneKind {
    pub const ALL: [MilestoneKind; 3] = [
        MilestoneKind::ListeningHours,
        MilestoneKind::TracksPlayed,
        MilestoneKind::DistinctArtists,
    ];

    /// Thresholds in ascending order; crossings are announced in this order.
    pub fn thresholds(&self) -> &'static [i64] {
        match self {
            MilestoneKind::ListeningHours => &[10, 50, 100, 500, 1000, 5000, 10000],
            MilestoneKind::TracksPlayed => &[100, 500, 1000, 5000, 10000, 50000],
            MilestoneKind::DistinctArtists => &[10, 50, 100, 500, 1000],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneKind::ListeningHours => "listening_hours",
            MilestoneKind::TracksPlayed => "tracks_played",
            MilestoneKind::DistinctArtists => "distinct_artists",
        }
    }
}

/// One line of a weekly or all-time leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub name: String,
    pub detail: Option<String>,
    pub plays: i64,
}

/// Aggregated listening figures over a reporting window.
#[derive(Debug, Clone, PartialEq)]
pub struct ListeningSummary {
    /// ISO week the summary covers, e.g. `2026-W34`.
    pub iso_week: String,
    pub total_plays: i64,
    pub total_minutes: i64,
    pub distinct_tracks: i64,
    pub distinct_artists: i64,
    pub top_track: Option<TopEntry>,
    pub top_artist: Option<TopEntry>,
}

/// ISO week key for a timestamp, e.g. `2026-W34`.
pub fn iso_week_key(at: DateTime<Utc>) -> String {
    let week = at.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// A change worth announcing, produced by a detector and owned by the
/// pipeline from detection through dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// The watched account started playing a different track.
    TrackStarted {
        track: NowPlaying,
        genres: Vec<String>,
        /// Lifetime play count for this track, including this play.
        play_count: u64,
        started_at: DateTime<Utc>,
    },
    /// A followed artist put out a new album or single.
    ReleaseDetected {
        artist_name: String,
        release: ReleaseItem,
    },
    /// A new push appeared on the watched GitHub account.
    PushDetected { push: PushEvent },
    /// A cumulative statistic crossed a fixed threshold.
    MilestoneReached { kind: MilestoneKind, threshold: i64 },
    /// The weekly listening recap for one ISO week.
    WeeklyRecap { summary: ListeningSummary },
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::TrackStarted { .. } => "track_started",
            DomainEvent::ReleaseDetected { .. } => "release_detected",
            DomainEvent::PushDetected { .. } => "push_detected",
            DomainEvent::MilestoneReached { .. } => "milestone_reached",
            DomainEvent::WeeklyRecap { .. } => "weekly_recap",
        }
    }

    /// Identifier for the real-world occurrence behind this event.
    ///
    /// Track starts are bucketed to the minute so that two pollers racing on
    /// the same play collapse to one key, while a genuine re-listen later on
    /// gets a fresh one.
    pub fn natural_key(&self) -> String {
        match self {
            DomainEvent::TrackStarted {
                track, started_at, ..
            } => {
                format!("{}:{}", track.track_id, started_at.timestamp() / 60)
            }
            DomainEvent::ReleaseDetected { release, .. } => release.release_id.clone(),
            DomainEvent::PushDetected { push } => push.event_id.clone(),
            DomainEvent::MilestoneReached { kind, threshold } => {
                format!("{}:{}", kind.as_str(), threshold)
            }
            DomainEvent::WeeklyRecap { summary } => summary.iso_week.clone(),
        }
    }

    /// Channel the event is announced in.
    pub fn channel_kind(&self) -> ChannelKind {
        match self {
            DomainEvent::TrackStarted { .. } => ChannelKind::Music,
            DomainEvent::ReleaseDetected { .. } => ChannelKind::News,
            DomainEvent::PushDetected { .. } => ChannelKind::Coding,
            DomainEvent::MilestoneReached { .. } => ChannelKind::Main,
            DomainEvent::WeeklyRecap { .. } => ChannelKind::Main,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn playing(track_id: &str) -> NowPlaying {
        NowPlaying {
            track_id: track_id.to_string(),
            track_name: "Song".to_string(),
            artist_id: None,
            artist_name: "Artist".to_string(),
            album_name: None,
            duration_ms: 200_000,
            image_url: None,
            spotify_url: None,
        }
    }

    #[test]
    fn track_key_collapses_within_a_minute() {
        let base = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 10).unwrap();
        let a = DomainEvent::TrackStarted {
            track: playing("t1"),
            genres: vec![],
            play_count: 1,
            started_at: base,
        };
        let b = DomainEvent::TrackStarted {
            track: playing("t1"),
            genres: vec![],
            play_count: 1,
            started_at: base + chrono::Duration::seconds(30),
        };
        assert_eq!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn track_key_differs_across_minutes() {
        let base = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 10).unwrap();
        let a = DomainEvent::TrackStarted {
            track: playing("t1"),
            genres: vec![],
            play_count: 1,
            started_at: base,
        };
        let b = DomainEvent::TrackStarted {
            track: playing("t1"),
            genres: vec![],
            play_count: 2,
            started_at: base + chrono::Duration::minutes(5),
        };
        assert_ne!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn iso_week_key_formats_year_and_week() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        // 2026-01-02 falls in ISO week 1 of 2026.
        assert_eq!(iso_week_key(at), "2026-W01");
    }
}
