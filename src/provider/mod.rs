//! Snapshot providers for the external services the bot watches.
//!
//! A provider answers "what is true right now" and nothing more. Transient
//! upstream trouble (timeouts, rate limits, auth hiccups) is reported as
//! `None`, which the services treat as "no observation this cycle" rather
//! than as a change. Detection and persistence live elsewhere.

pub mod github;
pub mod spotify;

use async_trait::async_trait;

use crate::model::{ArtistRef, AudioFeatures, NowPlaying, PushEvent, ReleaseItem};

pub use github::GithubClient;
pub use spotify::SpotifyClient;

/// Read-only view of the watched Spotify account.
#[async_trait]
pub trait SpotifySource: Send + Sync {
    /// The track playing right now, or `None` if nothing is playing or the
    /// service is unavailable this cycle.
    async fn now_playing(&self) -> Option<NowPlaying>;

    /// Genres attached to an artist. Enrichment only.
    async fn artist_genres(&self, artist_id: &str) -> Option<Vec<String>>;

    /// Audio analysis for a track. Enrichment only.
    async fn audio_features(&self, track_id: &str) -> Option<AudioFeatures>;

    /// Latest albums and singles for an artist, newest first.
    async fn latest_releases(&self, artist_id: &str) -> Option<Vec<ReleaseItem>>;

    /// Best artist match for a free-text query.
    async fn search_artist(&self, query: &str) -> Option<ArtistRef>;
}

/// Read-only view of the watched GitHub account's public activity.
#[async_trait]
pub trait GithubSource: Send + Sync {
    /// Recent pushes in chronological order, or `None` if the feed is
    /// unavailable this cycle.
    async fn recent_events(&self) -> Option<Vec<PushEvent>>;
}
