//! Multi-item change detection for feed-shaped providers.
//!
//! Releases and pushes arrive as lists where several items can be new at
//! once. The detector keeps the items whose natural key is not yet in the
//! seen set, preserving feed order so each novel item becomes its own event.

use sea_orm::{DatabaseConnection, DbErr};

use crate::data::SeenEventRepository;

pub struct FeedDetector<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedDetector<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Filters a feed down to items not yet recorded under `event_type`.
    ///
    /// This is the read-side skim; the commit that each surviving item goes
    /// through afterwards is what actually claims the key.
    pub async fn filter_novel<T, F>(
        &self,
        event_type: &str,
        items: Vec<T>,
        key: F,
    ) -> Result<Vec<T>, DbErr>
    where
        F: Fn(&T) -> String,
    {
        let gate = SeenEventRepository::new(self.db);
        let mut novel = Vec::new();

        for item in items {
            if !gate.contains(event_type, &key(&item)).await? {
                novel.push(item);
            }
        }

        Ok(novel)
    }
}
