//! Weekly recap pipeline.
//!
//! The gate key is the ISO week, so a recap can fire at most once per week
//! no matter how often the job runs or how many processes share the store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::{CommitOutcome, SeenEventRepository};
use crate::error::AppError;
use crate::model::{event::iso_week_key, DomainEvent};
use crate::service::{PollCycle, StatsService};

pub struct RecapService {
    db: DatabaseConnection,
}

impl RecapService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PollCycle for RecapService {
    fn name(&self) -> &'static str {
        "recap"
    }

    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError> {
        let week = iso_week_key(Utc::now());
        let gate = SeenEventRepository::new(&self.db);

        // Skim before computing; the commit below is still what claims
        // the week.
        if gate.contains("weekly_recap", &week).await? {
            return Ok(vec![]);
        }

        let summary = StatsService::new(self.db.clone()).weekly_summary().await?;
        let event = DomainEvent::WeeklyRecap { summary };

        match gate.commit(&event).await? {
            CommitOutcome::Accepted => Ok(vec![event]),
            CommitOutcome::AlreadyRecorded => Ok(vec![]),
        }
    }
}
