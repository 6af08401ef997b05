//! GitHub public events client.
//!
//! Polls the user's public activity feed and keeps only push events. The
//! feed arrives newest first; it is reversed so callers dispatch pushes in
//! the order they happened.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::model::PushEvent;
use crate::provider::GithubSource;

const API_BASE: &str = "https://api.github.com";

pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(http: reqwest::Client, config: GithubConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait::async_trait]
impl GithubSource for GithubClient {
    async fn recent_events(&self) -> Option<Vec<PushEvent>> {
        let url = format!(
            "{API_BASE}/users/{}/events?per_page=30",
            self.config.username
        );

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("github request failed: {err}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "github request rejected");
            return None;
        }

        let entries = match response.json::<Vec<EventEntry>>().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("github response malformed: {err}");
                return None;
            }
        };

        let mut pushes: Vec<PushEvent> = entries
            .into_iter()
            .filter(|entry| entry.kind == "PushEvent")
            .map(|entry| PushEvent {
                event_id: entry.id,
                repo_name: entry.repo.name,
                branch: entry
                    .payload
                    .git_ref
                    .map(|r| r.trim_start_matches("refs/heads/").to_string()),
                commit_messages: entry
                    .payload
                    .commits
                    .into_iter()
                    .map(|commit| commit.message)
                    .collect(),
                created_at: entry.created_at,
            })
            .collect();

        pushes.reverse();
        Some(pushes)
    }
}

#[derive(Deserialize)]
struct EventEntry {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    repo: RepoRef,
    #[serde(default)]
    payload: EventPayload,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RepoRef {
    name: String,
}

#[derive(Deserialize, Default)]
struct EventPayload {
    #[serde(rename = "ref")]
    git_ref: Option<String>,
    #[serde(default)]
    commits: Vec<CommitEntry>,
}

#[derive(Deserialize)]
struct CommitEntry {
    message: String,
}
