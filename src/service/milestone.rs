//! Milestone pipeline: compare cumulative statistics against thresholds.
//!
//! Statistics are derived from the play table on every cycle; the counter
//! table only remembers the previous evaluation so a crossing is announced
//! once. A statistic that jumps over several thresholds between cycles
//! announces each one, lowest first.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::data::{CommitOutcome, CounterRepository, SeenEventRepository, StatsRepository};
use crate::detector::milestone::crossed;
use crate::error::AppError;
use crate::model::{DomainEvent, MilestoneKind};
use crate::service::PollCycle;

pub struct MilestoneService {
    db: DatabaseConnection,
}

impl MilestoneService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PollCycle for MilestoneService {
    fn name(&self) -> &'static str {
        "milestone"
    }

    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError> {
        let totals = StatsRepository::new(&self.db).totals(None).await?;
        let counters = CounterRepository::new(&self.db);
        let gate = SeenEventRepository::new(&self.db);

        let mut events = Vec::new();

        for kind in MilestoneKind::ALL {
            let current = match kind {
                MilestoneKind::ListeningHours => totals.minutes / 60,
                MilestoneKind::TracksPlayed => totals.plays,
                MilestoneKind::DistinctArtists => totals.distinct_artists,
            };
            let previous = counters.get(kind.as_str()).await?;

            for threshold in crossed(kind, previous, current) {
                let event = DomainEvent::MilestoneReached { kind, threshold };
                if gate.commit(&event).await? == CommitOutcome::Accepted {
                    events.push(event);
                }
            }

            counters.advance(kind.as_str(), current).await?;
        }

        Ok(events)
    }
}
