use super::*;

/// Tests lookup of an unrecorded occurrence.
///
/// Expected: false
#[tokio::test]
async fn missing_key_is_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);

    assert!(!repo.contains("release_detected", "album-1").await?);

    Ok(())
}

/// Tests lookup after a commit.
///
/// Expected: true for the committed pair, false for the same key under
/// another event type
#[tokio::test]
async fn committed_key_is_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seen_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);
    repo.commit_key("release_detected", "album-1").await?;

    assert!(repo.contains("release_detected", "album-1").await?);
    assert!(!repo.contains("push_detected", "album-1").await?);

    Ok(())
}
