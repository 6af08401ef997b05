//! Channel-config factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating channel routing rows with customizable fields.
pub struct ChannelConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    kind: String,
    channel_id: i64,
}

impl<'a> ChannelConfigFactory<'a> {
    /// Creates a new factory with unique default values and kind `music`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id() as i64;
        Self {
            db,
            guild_id: 100_000 + n,
            kind: "music".to_string(),
            channel_id: 200_000 + n,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    /// Inserts the channel config row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created channel_config row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel_config::Model, DbErr> {
        entity::channel_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            kind: ActiveValue::Set(self.kind),
            channel_id: ActiveValue::Set(self.channel_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
