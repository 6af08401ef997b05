//! Durable last-observed values, keyed by entity.
//!
//! Backs the track change detector across restarts: the in-memory cache is
//! reconciled from here before the first comparison.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct TrackedStateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackedStateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Last recorded value for an entity key, if any.
    pub async fn get(&self, entity_key: &str) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::TrackedState::find_by_id(entity_key)
            .one(self.db)
            .await?;

        Ok(row.map(|row| row.last_value))
    }

    /// Upserts the last-observed value for an entity key.
    pub async fn set(&self, entity_key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::TrackedState::insert(entity::tracked_state::ActiveModel {
            entity_key: ActiveValue::Set(entity_key.to_string()),
            last_value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::tracked_state::Column::EntityKey)
                .update_columns([
                    entity::tracked_state::Column::LastValue,
                    entity::tracked_state::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
