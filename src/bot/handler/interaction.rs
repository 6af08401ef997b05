//! Slash command routing.

use serenity::all::{Context, Interaction};

use crate::bot::commands;
use crate::bot::handler::Handler;

pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let name = command.data.name.clone();

    let result = match name.as_str() {
        "setchannel" => commands::setchannel::run(&ctx, &command, &handler.db).await,
        "follow" => commands::follow::run(&ctx, &command, &handler.db, &handler.spotify).await,
        "unfollow" => commands::unfollow::run(&ctx, &command, &handler.db).await,
        "following" => commands::following::run(&ctx, &command, &handler.db).await,
        "nowplaying" => {
            commands::nowplaying::run(&ctx, &command, &handler.db, &handler.spotify).await
        }
        "top" => commands::top::run(&ctx, &command, &handler.db).await,
        "stats" => commands::stats::run(&ctx, &command, &handler.db).await,
        "theme" => commands::theme::run(&ctx, &command, &handler.db).await,
        _ => {
            tracing::warn!("Unknown command: /{name}");
            Ok(())
        }
    };

    if let Err(err) = result {
        tracing::error!("Command /{name} failed: {err}");
    }
}
