//! Cron-driven polling.
//!
//! Each pipeline gets its own job and its own cadence. A job takes its
//! service's lock with `try_lock`: if the previous cycle is still running,
//! the tick is skipped instead of queued, so slow upstreams can never stack
//! overlapping cycles of the same pipeline. Distinct pipelines run freely in
//! parallel.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::Http;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::dispatch::Dispatcher;
use crate::error::AppError;
use crate::provider::{GithubSource, SpotifySource};
use crate::service::{
    CodingActivityService, MilestoneService, MusicTrackerService, PollCycle, RecapService,
    ReleaseWatchService,
};

const NOW_PLAYING_SCHEDULE: &str = "*/30 * * * * *";
const RELEASES_SCHEDULE: &str = "0 0 */2 * * *";
const CODING_SCHEDULE: &str = "0 */5 * * * *";
const MILESTONES_SCHEDULE: &str = "0 0 * * * *";
const RECAP_SCHEDULE: &str = "0 0 20 * * Sun";

/// Starts every polling job. Returns once the scheduler is running in the
/// background.
pub async fn start_scheduler(
    db: DatabaseConnection,
    http: Arc<Http>,
    spotify: Arc<dyn SpotifySource>,
    github: Option<Arc<dyn GithubSource>>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let dispatcher = Arc::new(Dispatcher::new(db.clone(), http));

    scheduler
        .add(poll_job(
            NOW_PLAYING_SCHEDULE,
            MusicTrackerService::new(db.clone(), spotify.clone()),
            dispatcher.clone(),
        )?)
        .await?;

    scheduler
        .add(poll_job(
            RELEASES_SCHEDULE,
            ReleaseWatchService::new(db.clone(), spotify),
            dispatcher.clone(),
        )?)
        .await?;

    if let Some(github) = github {
        scheduler
            .add(poll_job(
                CODING_SCHEDULE,
                CodingActivityService::new(db.clone(), github),
                dispatcher.clone(),
            )?)
            .await?;
    } else {
        tracing::info!("no GitHub account configured, coding activity polling disabled");
    }

    scheduler
        .add(poll_job(
            MILESTONES_SCHEDULE,
            MilestoneService::new(db.clone()),
            dispatcher.clone(),
        )?)
        .await?;

    scheduler
        .add(poll_job(RECAP_SCHEDULE, RecapService::new(db), dispatcher)?)
        .await?;

    scheduler.start().await?;

    tracing::info!("polling scheduler started");

    Ok(())
}

/// Wraps one service in a cron job that runs a cycle per tick and dispatches
/// whatever the cycle accepted.
fn poll_job<S>(
    schedule: &str,
    service: S,
    dispatcher: Arc<Dispatcher>,
) -> Result<Job, JobSchedulerError>
where
    S: PollCycle + 'static,
{
    let service = Arc::new(Mutex::new(service));

    Job::new_async(schedule, move |_uuid, _lock| {
        let service = service.clone();
        let dispatcher = dispatcher.clone();

        Box::pin(async move {
            let Ok(mut service) = service.try_lock() else {
                tracing::debug!("previous cycle still running, tick skipped");
                return;
            };

            let events = match service.run_cycle().await {
                Ok(events) => events,
                Err(err) => {
                    tracing::error!(pipeline = service.name(), "poll cycle failed: {err}");
                    return;
                }
            };

            for event in events {
                if let Err(err) = dispatcher.dispatch(&event).await {
                    tracing::error!(
                        pipeline = service.name(),
                        event_type = event.event_type(),
                        "dispatch failed: {err}"
                    );
                }
            }
        })
    })
}
