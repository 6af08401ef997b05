//! Encore Test Utils
//!
//! Shared testing utilities for the encore bot. Provides a builder pattern for
//! creating test contexts with in-memory SQLite databases whose schemas are
//! generated from the entity models, plus factories for seeding test data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::SeenEvent;
//!
//! #[tokio::test]
//! async fn records_an_event() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(SeenEvent)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
