//! `/following` - list the release watch roster.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed, Timestamp};

use crate::bot::commands::{guild_theme, respond_embed, respond_text};
use crate::data::FollowedArtistRepository;
use crate::error::AppError;

pub fn register() -> CreateCommand {
    CreateCommand::new("following").description("List the artists being watched for releases")
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let artists = FollowedArtistRepository::new(db).list().await?;

    if artists.is_empty() {
        return respond_text(
            ctx,
            command,
            "Not following anyone yet. Try `/follow artist`.",
        )
        .await;
    }

    let theme = guild_theme(db, command.guild_id).await;
    let lines = artists
        .iter()
        .map(|artist| format!("- {}", artist.artist_name))
        .collect::<Vec<_>>()
        .join("\n");

    let embed = CreateEmbed::new()
        .title(format!("Following {} artists", artists.len()))
        .description(lines)
        .color(theme.primary)
        .timestamp(Timestamp::now());

    respond_embed(ctx, command, embed).await
}
