//! Poll-cycle services.
//!
//! Each service owns one snapshot-compare-commit pipeline: fetch a snapshot
//! from its provider, run the relevant detector, push candidates through the
//! idempotency gate, and hand back the accepted events. Dispatch happens in
//! the scheduler, after the cycle's record-keeping is complete.

pub mod coding_activity;
pub mod milestone;
pub mod music_tracker;
pub mod presence;
pub mod recap;
pub mod release_watch;
pub mod stats;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::error::AppError;
use crate::model::DomainEvent;

pub use coding_activity::CodingActivityService;
pub use milestone::MilestoneService;
pub use music_tracker::MusicTrackerService;
pub use presence::PresenceService;
pub use recap::RecapService;
pub use release_watch::ReleaseWatchService;
pub use stats::StatsService;

/// One tick of a polling pipeline.
///
/// A cycle either completes its record-keeping and returns the events it
/// was first to record, or fails and changes nothing. Returned events are
/// already committed; the caller's only job is delivery.
#[async_trait]
pub trait PollCycle: Send {
    fn name(&self) -> &'static str;

    async fn run_cycle(&mut self) -> Result<Vec<DomainEvent>, AppError>;
}
