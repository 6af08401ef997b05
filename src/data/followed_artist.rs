//! Followed-artist roster for the release watcher.

use chrono::Utc;
use migration::{Expr, ExprTrait, Func, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

pub struct FollowedArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowedArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an artist to the roster, refreshing the stored name if it is
    /// already followed.
    pub async fn follow(
        &self,
        artist_id: &str,
        artist_name: &str,
    ) -> Result<entity::followed_artist::Model, DbErr> {
        let artist =
            entity::prelude::FollowedArtist::insert(entity::followed_artist::ActiveModel {
                artist_id: ActiveValue::Set(artist_id.to_string()),
                artist_name: ActiveValue::Set(artist_name.to_string()),
                last_checked: ActiveValue::Set(None),
                last_release_id: ActiveValue::Set(None),
                followed_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::column(entity::followed_artist::Column::ArtistId)
                    .update_columns([entity::followed_artist::Column::ArtistName])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(artist)
    }

    /// Removes an artist by display name (case-insensitive).
    ///
    /// # Returns
    /// - `Ok(true)` - An artist was removed
    /// - `Ok(false)` - No artist with that name was followed
    pub async fn unfollow_by_name(&self, artist_name: &str) -> Result<bool, DbErr> {
        let artist = entity::prelude::FollowedArtist::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(
                    entity::followed_artist::Column::ArtistName,
                )))
                .eq(artist_name.to_lowercase()),
            )
            .one(self.db)
            .await?;

        match artist {
            Some(artist) => {
                artist.delete(self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All followed artists, oldest follow first.
    pub async fn list(&self) -> Result<Vec<entity::followed_artist::Model>, DbErr> {
        entity::prelude::FollowedArtist::find()
            .order_by_asc(entity::followed_artist::Column::FollowedAt)
            .all(self.db)
            .await
    }

    /// Marks an artist as checked now, recording the newest release seen.
    pub async fn touch_checked(
        &self,
        artist_id: &str,
        last_release_id: Option<&str>,
    ) -> Result<(), DbErr> {
        let mut update = entity::followed_artist::ActiveModel {
            artist_id: ActiveValue::Unchanged(artist_id.to_string()),
            last_checked: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };
        if let Some(release_id) = last_release_id {
            update.last_release_id = ActiveValue::Set(Some(release_id.to_string()));
        }

        entity::prelude::FollowedArtist::update(update)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
