use crate::data::tracked_state::TrackedStateRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_key_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedStateRepository::new(db);

    assert_eq!(repo.get("current_track").await?, None);

    Ok(())
}

/// Tests a write followed by a read.
///
/// Expected: the written value comes back
#[tokio::test]
async fn set_then_get_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedStateRepository::new(db);
    repo.set("current_track", "t1").await?;

    assert_eq!(repo.get("current_track").await?, Some("t1".to_string()));

    Ok(())
}

/// Tests overwriting a key.
///
/// Expected: the newest value wins
#[tokio::test]
async fn set_overwrites_previous_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedStateRepository::new(db);
    repo.set("current_track", "t1").await?;
    repo.set("current_track", "t2").await?;

    assert_eq!(repo.get("current_track").await?, Some("t2".to_string()));

    Ok(())
}
