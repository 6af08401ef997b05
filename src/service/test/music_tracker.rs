use std::sync::Arc;

use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use super::{playing, StubSpotify};
use crate::data::TrackedStateRepository;
use crate::model::DomainEvent;
use crate::service::{MusicTrackerService, PollCycle};

/// An unavailable player is not a change.
///
/// Verifies the cycle ends without writing anything: no play, no gate row,
/// no last-known track.
///
/// Expected: no events, store untouched
#[tokio::test]
async fn unavailable_provider_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spotify = Arc::new(StubSpotify::unavailable());
    let mut service = MusicTrackerService::new(db.clone(), spotify);

    let events = service.run_cycle().await.unwrap();

    assert!(events.is_empty());
    assert_eq!(entity::prelude::Play::find().count(db).await?, 0);
    assert_eq!(entity::prelude::SeenEvent::find().count(db).await?, 0);
    assert_eq!(
        TrackedStateRepository::new(db).get("current_track").await?,
        None
    );

    Ok(())
}

/// A new track produces one event and one history row.
///
/// Expected: TrackStarted with play_count 1, then silence while the same
/// track keeps playing
#[tokio::test]
async fn new_track_is_announced_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_now(Some(playing("t1")));
    let mut service = MusicTrackerService::new(db.clone(), spotify);

    let events = service.run_cycle().await.unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        DomainEvent::TrackStarted {
            track,
            genres,
            play_count,
            ..
        } => {
            assert_eq!(track.track_id, "t1");
            assert_eq!(genres, &vec!["shoegaze".to_string()]);
            assert_eq!(*play_count, 1);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Same track still playing on the next two ticks.
    assert!(service.run_cycle().await.unwrap().is_empty());
    assert!(service.run_cycle().await.unwrap().is_empty());

    assert_eq!(entity::prelude::Play::find().count(db).await?, 1);

    Ok(())
}

/// Switching tracks announces the new one.
///
/// Expected: one event per distinct switch
#[tokio::test]
async fn track_switch_is_announced() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_now(Some(playing("t1")));
    let mut service = MusicTrackerService::new(db.clone(), spotify.clone());

    service.run_cycle().await.unwrap();

    spotify.set_now(Some(playing("t2")));
    let events = service.run_cycle().await.unwrap();

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        DomainEvent::TrackStarted { track, .. } if track.track_id == "t2"
    ));
    assert_eq!(entity::prelude::Play::find().count(db).await?, 2);

    Ok(())
}

/// Restart safety: a fresh service over a populated store does not
/// re-announce the track that was current before the restart.
///
/// Expected: no events from the restarted instance
#[tokio::test]
async fn restart_does_not_reannounce() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_now(Some(playing("t1")));

    let mut before = MusicTrackerService::new(db.clone(), spotify.clone());
    assert_eq!(before.run_cycle().await.unwrap().len(), 1);

    let mut after = MusicTrackerService::new(db.clone(), spotify);
    assert!(after.run_cycle().await.unwrap().is_empty());

    assert_eq!(entity::prelude::Play::find().count(db).await?, 1);

    Ok(())
}

/// The player going quiet and coming back on the same track stays silent.
///
/// Expected: no event when the same play resumes being observed
#[tokio::test]
async fn gap_in_observations_is_not_a_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_now(Some(playing("t1")));
    let mut service = MusicTrackerService::new(db.clone(), spotify.clone());

    service.run_cycle().await.unwrap();

    spotify.set_now(None);
    assert!(service.run_cycle().await.unwrap().is_empty());

    spotify.set_now(Some(playing("t1")));
    assert!(service.run_cycle().await.unwrap().is_empty());

    Ok(())
}
