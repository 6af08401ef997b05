//! A single observed listen from the Spotify now-playing feed.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "play")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub track_id: String,
    pub track_name: String,
    pub artist_id: Option<String>,
    pub artist_name: String,
    pub album_name: Option<String>,
    pub duration_ms: i32,
    pub image_url: Option<String>,
    /// Comma-joined artist genres, fetched best-effort at record time.
    pub genres: Option<String>,
    pub valence: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub played_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
