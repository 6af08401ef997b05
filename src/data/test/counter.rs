use crate::data::counter::CounterRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests reading a counter that was never advanced.
///
/// Expected: zero
#[tokio::test]
async fn unknown_counter_is_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);

    assert_eq!(repo.get("tracks_played").await?, 0);

    Ok(())
}

/// Tests advancing a counter.
///
/// Expected: the new value is readable
#[tokio::test]
async fn advance_raises_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.advance("tracks_played", 120).await?;

    assert_eq!(repo.get("tracks_played").await?, 120);

    Ok(())
}

/// Tests that a counter never moves backwards.
///
/// Expected: a lower advance is ignored
#[tokio::test]
async fn advance_ignores_lower_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.advance("listening_hours", 50).await?;
    repo.advance("listening_hours", 30).await?;

    assert_eq!(repo.get("listening_hours").await?, 50);

    Ok(())
}
