mod bot;
mod config;
mod data;
mod detector;
mod dispatch;
mod error;
mod model;
mod provider;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::provider::{GithubClient, GithubSource, SpotifyClient, SpotifySource};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client()?;

    let spotify: Arc<dyn SpotifySource> = Arc::new(SpotifyClient::new(
        http_client.clone(),
        config.spotify.clone(),
    ));
    let github: Option<Arc<dyn GithubSource>> = config
        .github
        .clone()
        .map(|github| Arc::new(GithubClient::new(http_client, github)) as Arc<dyn GithubSource>);

    let client = bot::start::build_client(&config, db.clone(), spotify.clone()).await?;

    // The dispatcher shares the client's HTTP handle; the gateway connection
    // itself is not needed for sending messages.
    scheduler::start_scheduler(db, client.http.clone(), spotify, github).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    bot::start::start_bot(client).await
}
