//! Spotify Web API client.
//!
//! Authenticates with a long-lived refresh token and keeps the short-lived
//! access token in memory. A 401 triggers one token refresh; the original
//! request is not retried, the next poll cycle simply uses the new token.

use base64::{prelude::BASE64_STANDARD, Engine};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::SpotifyConfig;
use crate::model::{ArtistRef, AudioFeatures, NowPlaying, ReleaseItem};
use crate::provider::SpotifySource;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE: &str = "https://api.spotify.com/v1";

pub struct SpotifyClient {
    http: reqwest::Client,
    config: SpotifyConfig,
    access_token: RwLock<Option<String>>,
}

impl SpotifyClient {
    pub fn new(http: reqwest::Client, config: SpotifyConfig) -> Self {
        Self {
            http,
            config,
            access_token: RwLock::new(None),
        }
    }

    /// Exchanges the refresh token for a fresh access token.
    async fn refresh_token(&self) -> bool {
        let auth = BASE64_STANDARD.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let response = self
            .http
            .post(TOKEN_URL)
            .header(reqwest::header::AUTHORIZATION, format!("Basic {auth}"))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", &self.config.refresh_token),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "spotify token refresh rejected");
                return false;
            }
            Err(err) => {
                tracing::warn!("spotify token refresh failed: {err}");
                return false;
            }
        };

        match response.json::<TokenResponse>().await {
            Ok(token) => {
                *self.access_token.write().await = Some(token.access_token);
                true
            }
            Err(err) => {
                tracing::warn!("spotify token response malformed: {err}");
                false
            }
        }
    }

    /// GET a JSON endpoint with the current access token.
    ///
    /// Any failure mode comes back as `None`: the caller sees an unavailable
    /// provider and skips the cycle.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let token = match self.access_token.read().await.clone() {
            Some(token) => token,
            None => {
                if !self.refresh_token().await {
                    return None;
                }
                self.access_token.read().await.clone()?
            }
        };

        let response = match self.http.get(url).bearer_auth(&token).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("spotify request failed: {err}");
                return None;
            }
        };

        if response.status() == StatusCode::NO_CONTENT {
            return None;
        }

        if response.status() == StatusCode::UNAUTHORIZED {
            self.refresh_token().await;
            return None;
        }

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), %url, "spotify request rejected");
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!("spotify response malformed: {err}");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl SpotifySource for SpotifyClient {
    async fn now_playing(&self) -> Option<NowPlaying> {
        let response: CurrentlyPlayingResponse = self
            .get_json(&format!("{API_BASE}/me/player/currently-playing"))
            .await?;
        let item = response.item?;

        let artist = item.artists.into_iter().next()?;
        let image_url = item.album.images.into_iter().next().map(|image| image.url);

        Some(NowPlaying {
            track_id: item.id,
            track_name: item.name,
            artist_id: Some(artist.id),
            artist_name: artist.name,
            album_name: Some(item.album.name),
            duration_ms: item.duration_ms,
            image_url,
            spotify_url: item.external_urls.spotify,
        })
    }

    async fn artist_genres(&self, artist_id: &str) -> Option<Vec<String>> {
        let response: ArtistResponse = self
            .get_json(&format!("{API_BASE}/artists/{artist_id}"))
            .await?;
        Some(response.genres)
    }

    async fn audio_features(&self, track_id: &str) -> Option<AudioFeatures> {
        let response: AudioFeaturesResponse = self
            .get_json(&format!("{API_BASE}/audio-features/{track_id}"))
            .await?;
        Some(AudioFeatures {
            valence: response.valence,
            energy: response.energy,
            danceability: response.danceability,
        })
    }

    async fn latest_releases(&self, artist_id: &str) -> Option<Vec<ReleaseItem>> {
        let response: AlbumsResponse = self
            .get_json(&format!(
                "{API_BASE}/artists/{artist_id}/albums?include_groups=album,single&limit=10"
            ))
            .await?;

        let releases = response
            .items
            .into_iter()
            .map(|album| {
                let image_url = album.images.into_iter().next().map(|image| image.url);
                ReleaseItem {
                    release_id: album.id,
                    name: album.name,
                    release_type: album.album_type,
                    release_date: album.release_date,
                    url: album.external_urls.spotify,
                    image_url,
                }
            })
            .collect();

        Some(releases)
    }

    async fn search_artist(&self, query: &str) -> Option<ArtistRef> {
        let url = search_url(query)?;
        let response: SearchResponse = self.get_json(url.as_str()).await?;

        response
            .artists
            .items
            .into_iter()
            .next()
            .map(|artist| ArtistRef {
                id: artist.id,
                name: artist.name,
            })
    }
}

/// Search URL with the free-text query form-encoded, so names containing
/// `&`, `?`, or `#` survive intact.
fn search_url(query: &str) -> Option<reqwest::Url> {
    reqwest::Url::parse_with_params(
        &format!("{API_BASE}/search"),
        &[("q", query), ("type", "artist"), ("limit", "1")],
    )
    .ok()
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct CurrentlyPlayingResponse {
    item: Option<TrackItem>,
}

#[derive(Deserialize)]
struct TrackItem {
    id: String,
    name: String,
    duration_ms: i32,
    artists: Vec<ArtistItem>,
    album: AlbumRef,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Deserialize)]
struct ArtistItem {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct AlbumRef {
    name: String,
    #[serde(default)]
    images: Vec<ImageItem>,
}

#[derive(Deserialize)]
struct ImageItem {
    url: String,
}

#[derive(Deserialize, Default)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct ArtistResponse {
    #[serde(default)]
    genres: Vec<String>,
}

#[derive(Deserialize)]
struct AudioFeaturesResponse {
    valence: f64,
    energy: f64,
    danceability: f64,
}

#[derive(Deserialize)]
struct AlbumsResponse {
    items: Vec<AlbumItem>,
}

#[derive(Deserialize)]
struct AlbumItem {
    id: String,
    name: String,
    album_type: String,
    release_date: String,
    #[serde(default)]
    external_urls: ExternalUrls,
    #[serde(default)]
    images: Vec<ImageItem>,
}

#[derive(Deserialize)]
struct SearchResponse {
    artists: ArtistList,
}

#[derive(Deserialize)]
struct ArtistList {
    items: Vec<ArtistItem>,
}
