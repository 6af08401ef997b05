//! SeaORM entity models for the encore database schema.

pub mod channel_config;
pub mod counter;
pub mod followed_artist;
pub mod guild_setting;
pub mod play;
pub mod seen_event;
pub mod tracked_state;

pub mod prelude {
    pub use super::channel_config::Entity as ChannelConfig;
    pub use super::counter::Entity as Counter;
    pub use super::followed_artist::Entity as FollowedArtist;
    pub use super::guild_setting::Entity as GuildSetting;
    pub use super::play::Entity as Play;
    pub use super::seen_event::Entity as SeenEvent;
    pub use super::tracked_state::Entity as TrackedState;
}
