use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::followed_artist::FollowedArtistFactory};

use super::{release, StubSpotify};
use crate::data::SeenEventRepository;
use crate::model::DomainEvent;
use crate::service::{PollCycle, ReleaseWatchService};

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Several new releases in one sweep each become their own event, with
/// already-seen ones skipped.
///
/// Expected: two events for the two unseen recent releases
#[tokio::test]
async fn announces_each_unseen_release() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = FollowedArtistFactory::new(db).build().await?;

    SeenEventRepository::new(db)
        .commit_key("release_detected", "r1")
        .await?;

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_releases(Some(vec![
        release("r1", &today()),
        release("r2", &today()),
        release("r3", &today()),
    ]));

    let mut service = ReleaseWatchService::new(db.clone(), spotify);
    let events = service.run_cycle().await.unwrap();

    assert_eq!(events.len(), 2);
    for (event, expected) in events.iter().zip(["r2", "r3"]) {
        match event {
            DomainEvent::ReleaseDetected {
                artist_name,
                release,
            } => {
                assert_eq!(artist_name, &artist.artist_name);
                assert_eq!(release.release_id, expected);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    // The sweep is marked on the roster.
    let row = entity::prelude::FollowedArtist::find_by_id(&artist.artist_id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.last_checked.is_some());
    assert_eq!(row.last_release_id, Some("r3".to_string()));

    Ok(())
}

/// Re-running the sweep announces nothing new.
///
/// Expected: second cycle is empty
#[tokio::test]
async fn repeat_sweep_is_silent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FollowedArtistFactory::new(db).build().await?;

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_releases(Some(vec![release("r1", &today())]));

    let mut service = ReleaseWatchService::new(db.clone(), spotify);

    assert_eq!(service.run_cycle().await.unwrap().len(), 1);
    assert!(service.run_cycle().await.unwrap().is_empty());

    Ok(())
}

/// Old releases are history, not news.
///
/// Expected: nothing announced for a release outside the recency window
#[tokio::test]
async fn stale_releases_are_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FollowedArtistFactory::new(db).build().await?;

    let spotify = Arc::new(StubSpotify::unavailable());
    spotify.set_releases(Some(vec![release("r1", "2020-01-01")]));

    let mut service = ReleaseWatchService::new(db.clone(), spotify);

    assert!(service.run_cycle().await.unwrap().is_empty());

    Ok(())
}

/// An unavailable feed skips the artist without marking it checked.
///
/// Expected: no events, last_checked still unset
#[tokio::test]
async fn unavailable_feed_skips_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = FollowedArtistFactory::new(db).build().await?;

    let spotify = Arc::new(StubSpotify::unavailable());
    let mut service = ReleaseWatchService::new(db.clone(), spotify);

    assert!(service.run_cycle().await.unwrap().is_empty());

    let row = entity::prelude::FollowedArtist::find_by_id(&artist.artist_id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.last_checked.is_none());

    Ok(())
}
