use std::time::Duration;

use crate::{config::Config, error::AppError};

/// Bounded timeout for every outbound Spotify/GitHub request.
///
/// A stalled upstream service can delay at most one tick of its own poller,
/// never the whole process.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the SQLite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client used by the snapshot providers.
///
/// GitHub rejects requests without a User-Agent, so one is set globally.
pub fn setup_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent("encore-bot")
        .build()?;

    Ok(client)
}
