//! Per-guild presentation settings.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct GuildSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The guild's chosen embed theme name, if it ever picked one.
    pub async fn get_theme(&self, guild_id: i64) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::GuildSetting::find_by_id(guild_id)
            .one(self.db)
            .await?;

        Ok(row.map(|row| row.theme))
    }

    /// Upserts the guild's embed theme.
    pub async fn set_theme(&self, guild_id: i64, theme: &str) -> Result<(), DbErr> {
        entity::prelude::GuildSetting::insert(entity::guild_setting::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            theme: ActiveValue::Set(theme.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::guild_setting::Column::GuildId)
                .update_columns([entity::guild_setting::Column::Theme])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
