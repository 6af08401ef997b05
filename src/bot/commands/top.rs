//! `/top` - most-played tracks or artists.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{guild_theme, integer_option, respond_embed, string_option};
use crate::bot::embed;
use crate::data::StatsRepository;
use crate::error::AppError;

const DEFAULT_LIMIT: u64 = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new("top")
        .description("Most-played tracks or artists")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "category", "What to rank")
                .required(true)
                .add_string_choice("Tracks", "tracks")
                .add_string_choice("Artists", "artists"),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "limit",
                "How many entries (default 10)",
            )
            .min_int_value(1)
            .max_int_value(20),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let limit = integer_option(command, "limit")
        .map(|limit| limit as u64)
        .unwrap_or(DEFAULT_LIMIT);

    let stats = StatsRepository::new(db);
    let (title, entries) = match string_option(command, "category") {
        Some("artists") => ("Top Artists", stats.top_artists(limit, None).await?),
        _ => ("Top Tracks", stats.top_tracks(limit, None).await?),
    };

    let theme = guild_theme(db, command.guild_id).await;

    respond_embed(ctx, command, embed::top_reply(title, &entries, &theme)).await
}
