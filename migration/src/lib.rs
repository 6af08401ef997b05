pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_play_table;
mod m20260815_000002_create_followed_artist_table;
mod m20260815_000003_create_seen_event_table;
mod m20260815_000004_create_tracked_state_table;
mod m20260815_000005_create_counter_table;
mod m20260815_000006_create_channel_config_table;
mod m20260815_000007_create_guild_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_play_table::Migration),
            Box::new(m20260815_000002_create_followed_artist_table::Migration),
            Box::new(m20260815_000003_create_seen_event_table::Migration),
            Box::new(m20260815_000004_create_tracked_state_table::Migration),
            Box::new(m20260815_000005_create_counter_table::Migration),
            Box::new(m20260815_000006_create_channel_config_table::Migration),
            Box::new(m20260815_000007_create_guild_setting_table::Migration),
        ]
    }
}
