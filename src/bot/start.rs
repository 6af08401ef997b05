use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::provider::SpotifySource;

/// Builds the Discord client without starting it.
///
/// Split from [`start_bot`] so the caller can clone the HTTP handle for the
/// dispatcher and the shard manager for shutdown before the gateway loop
/// begins.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `db` - Database connection shared with the command handlers
/// - `spotify` - Player source used by `/nowplaying`, `/follow`, and presence
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError)` - Client construction failed
pub async fn build_client(
    config: &Config,
    db: DatabaseConnection,
    spotify: Arc<dyn SpotifySource>,
) -> Result<Client, AppError> {
    // Slash commands and channel lookups only; no privileged intents needed.
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, spotify);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the gateway loop. Blocks until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
