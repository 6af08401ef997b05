//! `/setchannel` - route one feed kind to the channel the command was run in.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{respond_text, string_option};
use crate::data::ChannelConfigRepository;
use crate::error::AppError;
use crate::model::ChannelKind;

pub fn register() -> CreateCommand {
    CreateCommand::new("setchannel")
        .description("Send a feed's announcements to this channel")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "feed", "Which feed to route here")
                .required(true)
                .add_string_choice("Music (track announcements)", "music")
                .add_string_choice("News (new releases)", "news")
                .add_string_choice("Main (milestones and recaps)", "main")
                .add_string_choice("Coding (GitHub pushes)", "coding"),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_text(ctx, command, "This command only works in a server.").await;
    };

    let Some(kind) = string_option(command, "feed").and_then(ChannelKind::from_str) else {
        return respond_text(ctx, command, "Unknown feed.").await;
    };

    let repo = ChannelConfigRepository::new(db);
    let channel_id = command.channel_id.get() as i64;

    let previous = repo.get(guild_id.get() as i64, kind).await?;
    repo.set(guild_id.get() as i64, kind, channel_id).await?;

    let reply = match previous {
        Some(previous) if previous.channel_id != channel_id => format!(
            "{} announcements moved from <#{}> to <#{}>.",
            kind.as_str(),
            previous.channel_id,
            channel_id
        ),
        _ => format!(
            "{} announcements will now land in <#{}>.",
            kind.as_str(),
            channel_id
        ),
    };

    respond_text(ctx, command, reply).await
}
