//! Idempotency gate over the seen_event table.
//!
//! Committing an event is a single atomic insert against the unique
//! `(event_type, natural_key)` index. Whichever caller wins the insert gets
//! `Accepted` and the right to dispatch; everyone else gets
//! `AlreadyRecorded`. There is no read-then-write window.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    TryInsertResult,
};

use crate::model::DomainEvent;

/// Result of attempting to record an event occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// First time this occurrence was recorded; the caller must dispatch it.
    Accepted,
    /// The occurrence was recorded previously; the caller must stay silent.
    AlreadyRecorded,
}

pub struct SeenEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeenEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a domain event occurrence exactly once.
    ///
    /// # Returns
    /// - `Ok(CommitOutcome::Accepted)` - This call recorded the occurrence
    /// - `Ok(CommitOutcome::AlreadyRecorded)` - A previous call already had
    /// - `Err(DbErr)` - Database error; the occurrence is not recorded
    pub async fn commit(&self, event: &DomainEvent) -> Result<CommitOutcome, DbErr> {
        self.commit_key(event.event_type(), &event.natural_key())
            .await
    }

    /// Key-level variant of [`commit`](Self::commit) for callers that need
    /// to claim a key before the event value is fully assembled.
    pub async fn commit_key(
        &self,
        event_type: &str,
        natural_key: &str,
    ) -> Result<CommitOutcome, DbErr> {
        let result = entity::prelude::SeenEvent::insert(entity::seen_event::ActiveModel {
            event_type: ActiveValue::Set(event_type.to_string()),
            natural_key: ActiveValue::Set(natural_key.to_string()),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::seen_event::Column::EventType,
                entity::seen_event::Column::NaturalKey,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(match result {
            TryInsertResult::Inserted(_) => CommitOutcome::Accepted,
            _ => CommitOutcome::AlreadyRecorded,
        })
    }

    /// Whether an occurrence has already been recorded.
    ///
    /// Read-only; feed detectors use this to skim off items that are known
    /// old before the commit step.
    pub async fn contains(&self, event_type: &str, natural_key: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SeenEvent::find()
            .filter(entity::seen_event::Column::EventType.eq(event_type))
            .filter(entity::seen_event::Column::NaturalKey.eq(natural_key))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
