use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::play::PlayFactory};

use crate::model::{event::iso_week_key, DomainEvent};
use crate::service::{PollCycle, RecapService};

/// The first recap of a week summarizes the recent listening.
///
/// Expected: one WeeklyRecap keyed by the current ISO week
#[tokio::test]
async fn first_recap_of_week_fires() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        PlayFactory::new(db)
            .track_name("Anthem")
            .artist_name("Artist")
            .duration_ms(180_000)
            .build()
            .await?;
    }

    let mut service = RecapService::new(db.clone());
    let events = service.run_cycle().await.unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        DomainEvent::WeeklyRecap { summary } => {
            assert_eq!(summary.iso_week, iso_week_key(chrono::Utc::now()));
            assert_eq!(summary.total_plays, 3);
            assert_eq!(summary.total_minutes, 9);
            assert_eq!(summary.top_track.as_ref().unwrap().name, "Anthem");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    Ok(())
}

/// A week is recapped at most once, however often the job runs.
///
/// Expected: every later cycle in the same week is empty
#[tokio::test]
async fn week_is_recapped_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pipeline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut service = RecapService::new(db.clone());

    assert_eq!(service.run_cycle().await.unwrap().len(), 1);
    assert!(service.run_cycle().await.unwrap().is_empty());
    assert!(service.run_cycle().await.unwrap().is_empty());

    Ok(())
}
