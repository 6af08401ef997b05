//! Coding-activity pipeline: poll the GitHub feed for new pushes.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::data::{CommitOutcome, SeenEventRepository};
use crate::detector::FeedDetector;
use crate::error::AppError;
use crate::model::DomainEvent;
use crate::provider::GithubSource;
use crate::service::PollCycle;

pub struct CodingActivityService {
    db: DatabaseConnection,
    github: Arc<dyn GithubSource>,
}

impl CodingActivityService {
    pub fn new(db: DatabaseConnection, github: Arc<dyn GithubSource>) -> Self {
        Self { db, github }
    }
}

#[async_trait]
impl PollCycle for CodingActivityService {
    fn name(&self) -> &'static str {
        "coding_activity"
    }

    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError> {
        let Some(pushes) = self.github.recent_events().await else {
            return Ok(vec![]);
        };

        let novel = FeedDetector::new(&self.db)
            .filter_novel("push_detected", pushes, |push| push.event_id.clone())
            .await?;

        let gate = SeenEventRepository::new(&self.db);
        let mut events = Vec::new();

        for push in novel {
            let event = DomainEvent::PushDetected { push };
            if gate.commit(&event).await? == CommitOutcome::Accepted {
                events.push(event);
            }
        }

        Ok(events)
    }
}
