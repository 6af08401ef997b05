use crate::error::{AppError, ConfigError};

pub struct Config {
    pub database_url: String,
    pub discord_token: String,
    pub spotify: SpotifyConfig,
    /// Absent when GITHUB_USERNAME is not set; the coding-activity poller is
    /// disabled in that case.
    pub github: Option<GithubConfig>,
}

#[derive(Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct GithubConfig {
    pub username: String,
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let github = std::env::var("GITHUB_USERNAME")
            .ok()
            .map(|username| GithubConfig {
                username,
                token: std::env::var("GITHUB_TOKEN").ok(),
            });

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_token: require("DISCORD_TOKEN")?,
            spotify: SpotifyConfig {
                client_id: require("SPOTIFY_CLIENT_ID")?,
                client_secret: require("SPOTIFY_CLIENT_SECRET")?,
                refresh_token: require("SPOTIFY_REFRESH_TOKEN")?,
            },
            github,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
