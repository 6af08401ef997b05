use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

use crate::provider::SpotifySource;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub spotify: Arc<dyn SpotifySource>,
    presence_started: AtomicBool,
}

impl Handler {
    pub fn new(db: DatabaseConnection, spotify: Arc<dyn SpotifySource>) -> Self {
        Self {
            db,
            spotify,
            presence_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called for every slash command invocation
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
