//! Monotonic named counters.
//!
//! Each counter remembers the highest statistic value the milestone poller
//! has already evaluated, so a threshold crossing is computed against the
//! previous observation rather than re-announced every hour. Each counter
//! has a single writer (the milestone job, which never overlaps itself).

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct CounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current value of a counter, zero if it was never advanced.
    pub async fn get(&self, name: &str) -> Result<i64, DbErr> {
        let row = entity::prelude::Counter::find_by_id(name)
            .one(self.db)
            .await?;

        Ok(row.map(|row| row.value).unwrap_or(0))
    }

    /// Raises a counter to `value`. A lower value is ignored so the counter
    /// never moves backwards.
    pub async fn advance(&self, name: &str, value: i64) -> Result<(), DbErr> {
        if value <= self.get(name).await? {
            return Ok(());
        }

        entity::prelude::Counter::insert(entity::counter::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::counter::Column::Name)
                .update_columns([
                    entity::counter::Column::Value,
                    entity::counter::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
