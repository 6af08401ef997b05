//! `/unfollow` - drop an artist from the release watch roster.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{respond_text, string_option};
use crate::data::FollowedArtistRepository;
use crate::error::AppError;

pub fn register() -> CreateCommand {
    CreateCommand::new("unfollow")
        .description("Stop following an artist")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "artist",
                "Name of the followed artist",
            )
            .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let Some(name) = string_option(command, "artist") else {
        return respond_text(ctx, command, "Give me an artist name.").await;
    };

    let removed = FollowedArtistRepository::new(db)
        .unfollow_by_name(name)
        .await?;

    let reply = if removed {
        format!("Unfollowed **{name}**.")
    } else {
        format!("You weren't following anyone called \"{name}\".")
    };

    respond_text(ctx, command, reply).await
}
