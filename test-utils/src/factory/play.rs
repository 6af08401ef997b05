//! Play factory for seeding listening history in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating play records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::play::PlayFactory;
///
/// let play = PlayFactory::new(&db)
///     .track_id("track-1")
///     .artist_name("Daft Punk")
///     .build()
///     .await?;
/// ```
pub struct PlayFactory<'a> {
    db: &'a DatabaseConnection,
    track_id: String,
    track_name: String,
    artist_id: Option<String>,
    artist_name: String,
    album_name: Option<String>,
    duration_ms: i32,
    genres: Option<String>,
    played_at: DateTime<Utc>,
}

impl<'a> PlayFactory<'a> {
    /// Creates a new factory with unique default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            track_id: format!("track-{n}"),
            track_name: format!("Track {n}"),
            artist_id: Some(format!("artist-{n}")),
            artist_name: format!("Artist {n}"),
            album_name: Some(format!("Album {n}")),
            duration_ms: 210_000,
            genres: None,
            played_at: Utc::now(),
        }
    }

    pub fn track_id(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = track_id.into();
        self
    }

    pub fn track_name(mut self, track_name: impl Into<String>) -> Self {
        self.track_name = track_name.into();
        self
    }

    pub fn artist_id(mut self, artist_id: Option<String>) -> Self {
        self.artist_id = artist_id;
        self
    }

    pub fn artist_name(mut self, artist_name: impl Into<String>) -> Self {
        self.artist_name = artist_name.into();
        self
    }

    pub fn album_name(mut self, album_name: Option<String>) -> Self {
        self.album_name = album_name;
        self
    }

    pub fn duration_ms(mut self, duration_ms: i32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn genres(mut self, genres: Option<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn played_at(mut self, played_at: DateTime<Utc>) -> Self {
        self.played_at = played_at;
        self
    }

    /// Inserts the play record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created play row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::play::Model, DbErr> {
        entity::play::ActiveModel {
            track_id: ActiveValue::Set(self.track_id),
            track_name: ActiveValue::Set(self.track_name),
            artist_id: ActiveValue::Set(self.artist_id),
            artist_name: ActiveValue::Set(self.artist_name),
            album_name: ActiveValue::Set(self.album_name),
            duration_ms: ActiveValue::Set(self.duration_ms),
            image_url: ActiveValue::Set(None),
            genres: ActiveValue::Set(self.genres),
            valence: ActiveValue::Set(None),
            energy: ActiveValue::Set(None),
            danceability: ActiveValue::Set(None),
            played_at: ActiveValue::Set(self.played_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
