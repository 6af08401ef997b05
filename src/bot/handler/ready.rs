//! Ready event handler for bot initialization.
//!
//! Fires when the bot completes the gateway handshake. Registers the global
//! slash commands and starts the presence refresh loop. The loop is started
//! once per process even though `ready` fires again on every reconnect.

use std::sync::atomic::Ordering;
use std::time::Duration;

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands;
use crate::bot::handler::Handler;
use crate::service::PresenceService;

const PRESENCE_REFRESH: Duration = Duration::from_secs(120);

pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(err) = Command::set_global_commands(&ctx.http, commands::registrations()).await {
        tracing::error!("Failed to register slash commands: {err}");
    }

    if handler.presence_started.swap(true, Ordering::SeqCst) {
        return;
    }

    let presence = PresenceService::new(handler.db.clone(), handler.spotify.clone());

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PRESENCE_REFRESH);
        loop {
            ticker.tick().await;
            let line = presence.status_line().await;
            ctx.set_activity(Some(ActivityData::listening(line)));
        }
    });
}
