//! Notification sinks.
//!
//! A sink is one place a rendered notification can land. The production sink
//! is a Discord channel; tests substitute fakes behind the same trait.

use async_trait::async_trait;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Http};
use std::sync::Arc;
use thiserror::Error;

/// A rendered announcement, ready to deliver.
#[derive(Debug, Clone)]
pub struct Notification {
    pub content: Option<String>,
    pub embed: CreateEmbed,
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Human-readable identity for delivery reports and logs.
    fn label(&self) -> String;

    async fn deliver(&self, notification: &Notification) -> Result<(), SinkError>;
}

/// Sends notifications to one configured channel in one guild.
pub struct DiscordChannelSink {
    http: Arc<Http>,
    guild_id: i64,
    channel_id: i64,
}

impl DiscordChannelSink {
    pub fn new(http: Arc<Http>, guild_id: i64, channel_id: i64) -> Self {
        Self {
            http,
            guild_id,
            channel_id,
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordChannelSink {
    fn label(&self) -> String {
        format!("guild {} channel {}", self.guild_id, self.channel_id)
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), SinkError> {
        let mut message = CreateMessage::new().embed(notification.embed.clone());
        if let Some(content) = &notification.content {
            message = message.content(content);
        }

        ChannelId::new(self.channel_id as u64)
            .send_message(&self.http, message)
            .await
            .map_err(Box::new)?;

        Ok(())
    }
}
