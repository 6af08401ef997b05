//! `/follow` - add an artist to the release watch roster.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{respond_text, string_option};
use crate::data::FollowedArtistRepository;
use crate::error::AppError;
use crate::provider::SpotifySource;

pub fn register() -> CreateCommand {
    CreateCommand::new("follow")
        .description("Follow an artist and get pinged about new releases")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "artist", "Artist name to follow")
                .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
    spotify: &Arc<dyn SpotifySource>,
) -> Result<(), AppError> {
    let Some(query) = string_option(command, "artist") else {
        return respond_text(ctx, command, "Give me an artist name.").await;
    };

    let Some(artist) = spotify.search_artist(query).await else {
        return respond_text(
            ctx,
            command,
            format!("Couldn't find an artist matching \"{query}\"."),
        )
        .await;
    };

    FollowedArtistRepository::new(db)
        .follow(&artist.id, &artist.name)
        .await?;

    respond_text(
        ctx,
        command,
        format!("Now following **{}**. New releases will be announced.", artist.name),
    )
    .await
}
