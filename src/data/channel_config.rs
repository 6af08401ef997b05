//! Per-guild channel routing.
//!
//! One row per `(guild_id, kind)`, enforced by a unique index. The kind is
//! always written from the closed [`ChannelKind`] enum; free-form strings
//! never reach this table.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::ChannelKind;

pub struct ChannelConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Points a guild's channel of the given kind at `channel_id`,
    /// replacing any previous assignment.
    pub async fn set(
        &self,
        guild_id: i64,
        kind: ChannelKind,
        channel_id: i64,
    ) -> Result<entity::channel_config::Model, DbErr> {
        let config = entity::prelude::ChannelConfig::insert(entity::channel_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            channel_id: ActiveValue::Set(channel_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::channel_config::Column::GuildId,
                entity::channel_config::Column::Kind,
            ])
            .update_columns([
                entity::channel_config::Column::ChannelId,
                entity::channel_config::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(config)
    }

    /// The configured channel of a kind for one guild, if any.
    pub async fn get(
        &self,
        guild_id: i64,
        kind: ChannelKind,
    ) -> Result<Option<entity::channel_config::Model>, DbErr> {
        entity::prelude::ChannelConfig::find()
            .filter(entity::channel_config::Column::GuildId.eq(guild_id))
            .filter(entity::channel_config::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await
    }

    /// Every guild's configured channel for a kind. Dispatch resolves its
    /// sink set from this at delivery time, never from a cached copy.
    pub async fn all_for_kind(
        &self,
        kind: ChannelKind,
    ) -> Result<Vec<entity::channel_config::Model>, DbErr> {
        entity::prelude::ChannelConfig::find()
            .filter(entity::channel_config::Column::Kind.eq(kind.as_str()))
            .all(self.db)
            .await
    }
}
