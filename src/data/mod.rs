//! Data access layer.
//!
//! Each repository borrows the shared `DatabaseConnection` and owns the
//! queries for one table. Services compose repositories; nothing above this
//! layer writes SQL.

pub mod channel_config;
pub mod counter;
pub mod followed_artist;
pub mod guild_setting;
pub mod play;
pub mod seen_event;
pub mod stats;
pub mod tracked_state;

#[cfg(test)]
mod test;

pub use channel_config::ChannelConfigRepository;
pub use counter::CounterRepository;
pub use followed_artist::FollowedArtistRepository;
pub use guild_setting::GuildSettingRepository;
pub use play::PlayRepository;
pub use seen_event::{CommitOutcome, SeenEventRepository};
pub use stats::{StatsRepository, Totals};
pub use tracked_state::TrackedStateRepository;
