use crate::data::guild_setting::GuildSettingRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests reading a theme for a guild that never picked one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unset_theme_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);

    assert_eq!(repo.get_theme(1).await?, None);

    Ok(())
}

/// Tests setting and replacing a guild's theme.
///
/// Expected: latest choice wins
#[tokio::test]
async fn set_theme_upserts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    repo.set_theme(1, "ocean").await?;
    repo.set_theme(1, "forest").await?;

    assert_eq!(repo.get_theme(1).await?, Some("forest".to_string()));

    Ok(())
}
