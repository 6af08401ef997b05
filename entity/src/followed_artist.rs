//! An artist watched for new releases.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "followed_artist")]
pub struct Model {
    /// Spotify artist id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub artist_id: String,
    pub artist_name: String,
    pub last_checked: Option<DateTimeUtc>,
    pub last_release_id: Option<String>,
    pub followed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
