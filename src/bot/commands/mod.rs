//! Slash command implementations.
//!
//! Each module owns one command: its registration shape and its runtime
//! behavior. Shared reply plumbing lives here.

pub mod follow;
pub mod following;
pub mod nowplaying;
pub mod setchannel;
pub mod stats;
pub mod theme;
pub mod top;
pub mod unfollow;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, ResolvedValue,
};

use crate::bot::theme::Theme;
use crate::data::GuildSettingRepository;
use crate::error::AppError;

/// Every command the bot registers globally on startup.
pub fn registrations() -> Vec<CreateCommand> {
    vec![
        setchannel::register(),
        follow::register(),
        unfollow::register(),
        following::register(),
        nowplaying::register(),
        top::register(),
        stats::register(),
        theme::register(),
    ]
}

/// Replies to an interaction with a plain text message.
pub async fn respond_text(
    ctx: &Context,
    command: &CommandInteraction,
    text: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(text),
            ),
        )
        .await?;

    Ok(())
}

/// Replies to an interaction with a single embed.
pub async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}

/// First string option with the given name, if present.
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command.data.options().into_iter().find_map(|option| {
        if option.name == name {
            match option.value {
                ResolvedValue::String(value) => Some(value),
                _ => None,
            }
        } else {
            None
        }
    })
}

/// First integer option with the given name, if present.
pub fn integer_option(command: &CommandInteraction, name: &str) -> Option<i64> {
    command.data.options().into_iter().find_map(|option| {
        if option.name == name {
            match option.value {
                ResolvedValue::Integer(value) => Some(value),
                _ => None,
            }
        } else {
            None
        }
    })
}

/// The embed theme for the guild the command came from.
pub async fn guild_theme(db: &DatabaseConnection, guild_id: Option<GuildId>) -> Theme {
    let Some(guild_id) = guild_id else {
        return Theme::default();
    };

    GuildSettingRepository::new(db)
        .get_theme(guild_id.get() as i64)
        .await
        .ok()
        .flatten()
        .and_then(|name| Theme::by_name(&name))
        .unwrap_or_default()
}
