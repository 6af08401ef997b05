//! `/stats` - all-time listening figures.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::commands::{guild_theme, respond_embed};
use crate::bot::embed;
use crate::error::AppError;
use crate::service::StatsService;

pub fn register() -> CreateCommand {
    CreateCommand::new("stats").description("All-time listening statistics")
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let summary = StatsService::new(db.clone()).overall_summary().await?;
    let theme = guild_theme(db, command.guild_id).await;

    respond_embed(
        ctx,
        command,
        embed::stats_reply(&summary, "All-Time Listening", &theme),
    )
    .await
}
