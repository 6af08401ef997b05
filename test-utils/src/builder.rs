use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Use the builder pattern to add entity tables (and, where a repository
/// depends on one, unique indexes), then call `build()` to create the
/// configured in-memory database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Play, FollowedArtist};
///
/// let test = TestBuilder::new()
///     .with_table(Play)
///     .with_table(FollowedArtist)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Chain multiple calls to add multiple
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the seen_event table together with its composite unique index.
    ///
    /// The idempotency gate is only meaningful with the
    /// `(event_type, natural_key)` uniqueness constraint in place, and that
    /// constraint lives in a migration rather than the entity, so tests must
    /// request it explicitly through this method.
    pub fn with_seen_event_table(mut self) -> Self {
        self = self.with_table(SeenEvent);
        self.indexes.push(
            Index::create()
                .name("idx_seen_event_unique")
                .table(entity::seen_event::Entity)
                .col(entity::seen_event::Column::EventType)
                .col(entity::seen_event::Column::NaturalKey)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Adds the channel_config table together with its `(guild_id, kind)`
    /// unique index, matching the production migration.
    pub fn with_channel_config_table(mut self) -> Self {
        self = self.with_table(ChannelConfig);
        self.indexes.push(
            Index::create()
                .name("idx_channel_config_unique")
                .table(entity::channel_config::Entity)
                .col(entity::channel_config::Column::GuildId)
                .col(entity::channel_config::Column::Kind)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Adds every table the polling pipeline touches.
    ///
    /// Convenience for service-level tests that exercise a full poll cycle
    /// (detect, record, gate) without caring which individual tables are hit.
    pub fn with_pipeline_tables(self) -> Self {
        self.with_table(Play)
            .with_table(FollowedArtist)
            .with_table(TrackedState)
            .with_table(Counter)
            .with_seen_event_table()
            .with_channel_config_table()
            .with_table(GuildSetting)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with schema ready
    /// - `Err(TestError::Database)` - Failed to connect or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
