//! Service tests over stub providers and an in-memory store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::{ArtistRef, AudioFeatures, NowPlaying, PushEvent, ReleaseItem};
use crate::provider::{GithubSource, SpotifySource};

mod music_tracker;
mod recap;
mod release_watch;

/// Spotify stub whose answers are set by each test.
pub struct StubSpotify {
    now: Mutex<Option<NowPlaying>>,
    releases: Mutex<Option<Vec<ReleaseItem>>>,
}

impl StubSpotify {
    pub fn unavailable() -> Self {
        Self {
            now: Mutex::new(None),
            releases: Mutex::new(None),
        }
    }

    pub fn set_now(&self, track: Option<NowPlaying>) {
        *self.now.lock().unwrap() = track;
    }

    pub fn set_releases(&self, releases: Option<Vec<ReleaseItem>>) {
        *self.releases.lock().unwrap() = releases;
    }
}

#[async_trait]
impl SpotifySource for StubSpotify {
    async fn now_playing(&self) -> Option<NowPlaying> {
        self.now.lock().unwrap().clone()
    }

    async fn artist_genres(&self, _artist_id: &str) -> Option<Vec<String>> {
        Some(vec!["shoegaze".to_string()])
    }

    async fn audio_features(&self, _track_id: &str) -> Option<AudioFeatures> {
        None
    }

    async fn latest_releases(&self, _artist_id: &str) -> Option<Vec<ReleaseItem>> {
        self.releases.lock().unwrap().clone()
    }

    async fn search_artist(&self, _query: &str) -> Option<ArtistRef> {
        None
    }
}

/// GitHub stub returning a fixed feed.
pub struct StubGithub {
    pushes: Mutex<Option<Vec<PushEvent>>>,
}

impl StubGithub {
    pub fn with_pushes(pushes: Vec<PushEvent>) -> Self {
        Self {
            pushes: Mutex::new(Some(pushes)),
        }
    }
}

#[async_trait]
impl GithubSource for StubGithub {
    async fn recent_events(&self) -> Option<Vec<PushEvent>> {
        self.pushes.lock().unwrap().clone()
    }
}

pub fn playing(track_id: &str) -> NowPlaying {
    NowPlaying {
        track_id: track_id.to_string(),
        track_name: format!("Track {track_id}"),
        artist_id: Some("a1".to_string()),
        artist_name: "Artist".to_string(),
        album_name: Some("Album".to_string()),
        duration_ms: 210_000,
        image_url: None,
        spotify_url: None,
    }
}

pub fn release(release_id: &str, release_date: &str) -> ReleaseItem {
    ReleaseItem {
        release_id: release_id.to_string(),
        name: format!("Release {release_id}"),
        release_type: "album".to_string(),
        release_date: release_date.to_string(),
        url: None,
        image_url: None,
    }
}

pub fn push(event_id: &str) -> PushEvent {
    PushEvent {
        event_id: event_id.to_string(),
        repo_name: "user/repo".to_string(),
        branch: Some("main".to_string()),
        commit_messages: vec!["fix parser".to_string()],
        created_at: None,
    }
}
