//! Application error types.
//!
//! `AppError` aggregates the error types that can occur anywhere in the bot.
//! Most variants use `#[from]` for automatic conversion with `?`. Transient
//! upstream failures (Spotify/GitHub timeouts, rate limits) never surface
//! here: the snapshot providers swallow them and report "unavailable" for the
//! cycle instead. A database error, by contrast, always propagates so the
//! poll cycle that hit it is abandoned with state intact.

use thiserror::Error;

/// Configuration error during startup or environment variable loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Abandons the poll cycle that raised it; the next scheduled tick
    /// retries with state intact.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// HTTP client error from reqwest during startup wiring.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as
/// serenity::Error is very large and would make all AppError variants larger
/// if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
