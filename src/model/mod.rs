//! Domain types shared across the polling, detection, and dispatch layers.

pub mod event;
pub mod snapshot;

pub use event::{ChannelKind, DomainEvent, ListeningSummary, MilestoneKind, TopEntry};
pub use snapshot::{ArtistRef, AudioFeatures, NowPlaying, PushEvent, ReleaseItem};
