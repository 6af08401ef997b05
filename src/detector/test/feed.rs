use crate::data::SeenEventRepository;
use crate::detector::FeedDetector;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests filtering a feed where part of it is already recorded.
///
/// Three items arrive, two were seen before.
///
/// Expected: exactly the one unseen item survives
#[tokio::test]
async fn keeps_only_unseen_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gate = SeenEventRepository::new(db);
    gate.commit_key("release_detected", "r1").await?;
    gate.commit_key("release_detected", "r3").await?;

    let items = vec!["r1".to_string(), "r2".to_string(), "r3".to_string()];
    let novel = FeedDetector::new(db)
        .filter_novel("release_detected", items, |item| item.clone())
        .await?;

    assert_eq!(novel, vec!["r2".to_string()]);

    Ok(())
}

/// Tests that feed order survives filtering.
///
/// Expected: novel items in their original order
#[tokio::test]
async fn preserves_feed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SeenEventRepository::new(db)
        .commit_key("push_detected", "p2")
        .await?;

    let items = vec![
        "p1".to_string(),
        "p2".to_string(),
        "p3".to_string(),
        "p4".to_string(),
    ];
    let novel = FeedDetector::new(db)
        .filter_novel("push_detected", items, |item| item.clone())
        .await?;

    assert_eq!(
        novel,
        vec!["p1".to_string(), "p3".to_string(), "p4".to_string()]
    );

    Ok(())
}

/// Tests an entirely stale feed.
///
/// Expected: nothing survives
#[tokio::test]
async fn fully_seen_feed_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gate = SeenEventRepository::new(db);
    gate.commit_key("release_detected", "r1").await?;
    gate.commit_key("release_detected", "r2").await?;

    let items = vec!["r1".to_string(), "r2".to_string()];
    let novel = FeedDetector::new(db)
        .filter_novel("release_detected", items, |item| item.clone())
        .await?;

    assert!(novel.is_empty());

    Ok(())
}
