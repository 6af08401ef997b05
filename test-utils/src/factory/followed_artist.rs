//! Followed-artist factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating followed artists with customizable fields.
pub struct FollowedArtistFactory<'a> {
    db: &'a DatabaseConnection,
    artist_id: String,
    artist_name: String,
    last_checked: Option<DateTime<Utc>>,
    last_release_id: Option<String>,
}

impl<'a> FollowedArtistFactory<'a> {
    /// Creates a new factory with unique default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            artist_id: format!("artist-{n}"),
            artist_name: format!("Artist {n}"),
            last_checked: None,
            last_release_id: None,
        }
    }

    pub fn artist_id(mut self, artist_id: impl Into<String>) -> Self {
        self.artist_id = artist_id.into();
        self
    }

    pub fn artist_name(mut self, artist_name: impl Into<String>) -> Self {
        self.artist_name = artist_name.into();
        self
    }

    pub fn last_checked(mut self, last_checked: Option<DateTime<Utc>>) -> Self {
        self.last_checked = last_checked;
        self
    }

    pub fn last_release_id(mut self, last_release_id: Option<String>) -> Self {
        self.last_release_id = last_release_id;
        self
    }

    /// Inserts the followed artist.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created followed_artist row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::followed_artist::Model, DbErr> {
        entity::followed_artist::ActiveModel {
            artist_id: ActiveValue::Set(self.artist_id),
            artist_name: ActiveValue::Set(self.artist_name),
            last_checked: ActiveValue::Set(self.last_checked),
            last_release_id: ActiveValue::Set(self.last_release_id),
            followed_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
