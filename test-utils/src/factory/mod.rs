//! Factories for creating test entities with sensible defaults.

pub mod channel_config;
pub mod followed_artist;
pub mod helpers;
pub mod play;
