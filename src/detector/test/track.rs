use crate::data::TrackedStateRepository;
use crate::detector::TrackChangeDetector;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests the first observation ever.
///
/// Expected: a change, and the track becomes the durable last-known value
#[tokio::test]
async fn first_observation_is_a_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut detector = TrackChangeDetector::new();

    assert!(detector.detect(db, "t1").await?);

    let stored = TrackedStateRepository::new(db).get("current_track").await?;
    assert_eq!(stored, Some("t1".to_string()));

    Ok(())
}

/// Tests feeding the same snapshot repeatedly.
///
/// Verifies identity-based novelty: a repeated observation of the same
/// track is never a change, no matter how many ticks see it.
///
/// Expected: no change on either repeat, store untouched
#[tokio::test]
async fn same_snapshot_is_stable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut detector = TrackChangeDetector::new();
    detector.detect(db, "t1").await?;

    assert!(!detector.detect(db, "t1").await?);
    assert!(!detector.detect(db, "t1").await?);

    Ok(())
}

/// Tests switching tracks and coming back.
///
/// A return to an earlier track is still a change; plays are counted, not
/// deduplicated forever.
///
/// Expected: change on switch, change on return
#[tokio::test]
async fn returning_to_a_track_is_a_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut detector = TrackChangeDetector::new();
    detector.detect(db, "t1").await?;

    assert!(detector.detect(db, "t2").await?);
    assert!(detector.detect(db, "t1").await?);

    Ok(())
}

/// Tests a failing store.
///
/// A detector that cannot read its last-known value reports the error so
/// the caller abandons the cycle; it never treats the track as new or as
/// already seen.
///
/// Expected: Err, no change reported
#[tokio::test]
async fn store_failure_abandons_the_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.clone().close().await?;

    let mut detector = TrackChangeDetector::new();

    assert!(detector.detect(db, "t1").await.is_err());

    Ok(())
}

/// Tests restart behavior.
///
/// A fresh detector over a populated store must reconcile from the store,
/// not re-announce the track that was already current before the restart.
///
/// Expected: no change for the known track, change for a new one
#[tokio::test]
async fn fresh_detector_reconciles_from_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut first = TrackChangeDetector::new();
    first.detect(db, "t1").await?;

    let mut restarted = TrackChangeDetector::new();

    assert!(!restarted.detect(db, "t1").await?);
    assert!(restarted.detect(db, "t2").await?);

    Ok(())
}
