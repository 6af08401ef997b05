//! `/nowplaying` - what the watched account is playing right now.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::commands::{guild_theme, respond_embed, respond_text};
use crate::bot::embed;
use crate::data::PlayRepository;
use crate::error::AppError;
use crate::provider::SpotifySource;

pub fn register() -> CreateCommand {
    CreateCommand::new("nowplaying").description("Show the track playing right now")
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
    spotify: &Arc<dyn SpotifySource>,
) -> Result<(), AppError> {
    let Some(track) = spotify.now_playing().await else {
        return respond_text(ctx, command, "Nothing playing right now.").await;
    };

    let play_count = PlayRepository::new(db).play_count(&track.track_id).await?;
    let theme = guild_theme(db, command.guild_id).await;

    respond_embed(
        ctx,
        command,
        embed::now_playing_reply(&track, play_count, &theme),
    )
    .await
}
