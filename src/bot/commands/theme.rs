//! `/theme` - pick the embed palette for this guild.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{respond_text, string_option};
use crate::bot::theme::{Theme, THEMES};
use crate::data::GuildSettingRepository;
use crate::error::AppError;

pub fn register() -> CreateCommand {
    let mut option = CreateCommandOption::new(
        CommandOptionType::String,
        "name",
        "Palette to use (omit to list them)",
    );
    for theme in THEMES {
        option = option.add_string_choice(theme.name, theme.name);
    }

    CreateCommand::new("theme")
        .description("Choose the embed colors for this server")
        .add_option(option)
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_text(ctx, command, "This command only works in a server.").await;
    };

    let Some(name) = string_option(command, "name") else {
        let available = THEMES
            .iter()
            .map(|theme| theme.name)
            .collect::<Vec<_>>()
            .join(", ");
        return respond_text(ctx, command, format!("Available themes: {available}.")).await;
    };

    if Theme::by_name(name).is_none() {
        return respond_text(ctx, command, format!("No theme called \"{name}\".")).await;
    }

    GuildSettingRepository::new(db)
        .set_theme(guild_id.get() as i64, name)
        .await?;

    respond_text(ctx, command, format!("Theme set to **{name}**.")).await
}
