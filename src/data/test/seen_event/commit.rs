use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests committing a fresh occurrence.
///
/// Verifies that the first commit of a (event_type, natural_key) pair is
/// accepted and leaves exactly one row behind.
///
/// Expected: Accepted, one row
#[tokio::test]
async fn first_commit_is_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);
    let outcome = repo.commit_key("track_started", "t1:100").await?;

    assert_eq!(outcome, CommitOutcome::Accepted);

    let count = entity::prelude::SeenEvent::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests committing the same occurrence twice.
///
/// Verifies that only the first commit is accepted, so two pollers seeing
/// the same occurrence can produce at most one announcement.
///
/// Expected: Accepted then AlreadyRecorded, one row
#[tokio::test]
async fn second_commit_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);

    assert_eq!(
        repo.commit_key("track_started", "t1:100").await?,
        CommitOutcome::Accepted
    );
    assert_eq!(
        repo.commit_key("track_started", "t1:100").await?,
        CommitOutcome::AlreadyRecorded
    );

    let count = entity::prelude::SeenEvent::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that repeated commits never yield a second acceptance.
///
/// Expected: exactly one Accepted across five attempts
#[tokio::test]
async fn exactly_one_acceptance_across_repeats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);

    let mut accepted = 0;
    for _ in 0..5 {
        if repo.commit_key("release_detected", "album-1").await? == CommitOutcome::Accepted {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);

    Ok(())
}

/// Tests that the same natural key under different event types does not
/// collide.
///
/// Expected: both commits accepted
#[tokio::test]
async fn key_is_scoped_by_event_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);

    assert_eq!(
        repo.commit_key("release_detected", "abc").await?,
        CommitOutcome::Accepted
    );
    assert_eq!(
        repo.commit_key("push_detected", "abc").await?,
        CommitOutcome::Accepted
    );

    Ok(())
}

/// Tests two concurrent commits of the same occurrence.
///
/// Verifies the claim is atomic: whichever future wins the insert gets
/// Accepted, the other sees AlreadyRecorded.
///
/// Expected: one Accepted, one AlreadyRecorded
#[tokio::test]
async fn concurrent_commits_accept_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);

    let (a, b) = tokio::join!(
        repo.commit_key("milestone_reached", "tracks_played:100"),
        repo.commit_key("milestone_reached", "tracks_played:100"),
    );

    let outcomes = [a?, b?];
    let accepted = outcomes
        .iter()
        .filter(|o| **o == CommitOutcome::Accepted)
        .count();

    assert_eq!(accepted, 1);

    Ok(())
}
