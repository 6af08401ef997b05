//! Embed rendering for announcements and command replies.
//!
//! Everything user-visible is built here so the services and dispatcher stay
//! presentation-free.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::bot::theme::Theme;
use crate::dispatch::Notification;
use crate::model::{
    DomainEvent, ListeningSummary, MilestoneKind, NowPlaying, PushEvent, ReleaseItem, TopEntry,
};

/// Renders a domain event into the notification sent to a guild.
pub fn render_event(event: &DomainEvent, theme: &Theme) -> Notification {
    let embed = match event {
        DomainEvent::TrackStarted {
            track,
            genres,
            play_count,
            ..
        } => track_started_embed(track, genres, *play_count, theme),
        DomainEvent::ReleaseDetected {
            artist_name,
            release,
        } => release_embed(artist_name, release, theme),
        DomainEvent::PushDetected { push } => push_embed(push, theme),
        DomainEvent::MilestoneReached { kind, threshold } => {
            milestone_embed(*kind, *threshold, theme)
        }
        DomainEvent::WeeklyRecap { summary } => recap_embed(summary, theme),
    };

    Notification {
        content: None,
        embed,
    }
}

fn track_started_embed(
    track: &NowPlaying,
    genres: &[String],
    play_count: u64,
    theme: &Theme,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Now Playing")
        .description(format!("**{}**\nby {}", track.track_name, track.artist_name))
        .color(theme.primary)
        .timestamp(Timestamp::now());

    if let Some(album) = &track.album_name {
        embed = embed.field("Album", album.clone(), true);
    }
    embed = embed.field("Plays", play_count.to_string(), true);
    if !genres.is_empty() {
        embed = embed.field("Genres", genres.join(", "), true);
    }
    if let Some(url) = &track.spotify_url {
        embed = embed.field("Listen", format!("[Open in Spotify]({url})"), false);
    }
    if let Some(image) = &track.image_url {
        embed = embed.thumbnail(image.clone());
    }

    embed
}

fn release_embed(artist_name: &str, release: &ReleaseItem, theme: &Theme) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("New Release")
        .description(format!(
            "**{}** just released **{}** ({})",
            artist_name, release.name, release.release_type
        ))
        .color(theme.highlight)
        .field("Released", release.release_date.clone(), true)
        .timestamp(Timestamp::now());

    if let Some(url) = &release.url {
        embed = embed.field("Listen", format!("[Open in Spotify]({url})"), false);
    }
    if let Some(image) = &release.image_url {
        embed = embed.thumbnail(image.clone());
    }

    embed
}

fn push_embed(push: &PushEvent, theme: &Theme) -> CreateEmbed {
    let mut description = format!("Pushed to **{}**", push.repo_name);
    if let Some(branch) = &push.branch {
        description.push_str(&format!(" on `{branch}`"));
    }

    let mut embed = CreateEmbed::new()
        .title("Code Activity")
        .description(description)
        .color(theme.accent)
        .timestamp(Timestamp::now());

    if !push.commit_messages.is_empty() {
        let commits = push
            .commit_messages
            .iter()
            .take(5)
            .map(|message| format!("- {}", message.lines().next().unwrap_or(message)))
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field("Commits", commits, false);
    }

    embed
}

fn milestone_embed(kind: MilestoneKind, threshold: i64, theme: &Theme) -> CreateEmbed {
    let line = match kind {
        MilestoneKind::ListeningHours => format!("{threshold} hours of listening"),
        MilestoneKind::TracksPlayed => format!("{threshold} tracks played"),
        MilestoneKind::DistinctArtists => format!("{threshold} different artists heard"),
    };

    CreateEmbed::new()
        .title("Milestone Reached")
        .description(format!("**{line}**"))
        .color(theme.highlight)
        .footer(CreateEmbedFooter::new("Keep it spinning"))
        .timestamp(Timestamp::now())
}

fn recap_embed(summary: &ListeningSummary, theme: &Theme) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Weekly Recap \u{2014} {}", summary.iso_week))
        .color(theme.primary)
        .field("Plays", summary.total_plays.to_string(), true)
        .field("Minutes", summary.total_minutes.to_string(), true)
        .field("Tracks", summary.distinct_tracks.to_string(), true)
        .field("Artists", summary.distinct_artists.to_string(), true)
        .timestamp(Timestamp::now());

    if let Some(track) = &summary.top_track {
        let by = track.detail.as_deref().unwrap_or("unknown");
        embed = embed.field(
            "Top Track",
            format!("{} by {} ({} plays)", track.name, by, track.plays),
            false,
        );
    }
    if let Some(artist) = &summary.top_artist {
        embed = embed.field(
            "Top Artist",
            format!("{} ({} plays)", artist.name, artist.plays),
            false,
        );
    }

    embed
}

/// Reply embed for `/nowplaying`.
pub fn now_playing_reply(track: &NowPlaying, play_count: u64, theme: &Theme) -> CreateEmbed {
    track_started_embed(track, &[], play_count, theme)
}

/// Reply embed for `/top`.
pub fn top_reply(title: &str, entries: &[TopEntry], theme: &Theme) -> CreateEmbed {
    let description = if entries.is_empty() {
        "Nothing recorded yet.".to_string()
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match &entry.detail {
                Some(detail) => format!(
                    "**{}.** {} by {} ({} plays)",
                    i + 1,
                    entry.name,
                    detail,
                    entry.plays
                ),
                None => format!("**{}.** {} ({} plays)", i + 1, entry.name, entry.plays),
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title(title.to_string())
        .description(description)
        .color(theme.primary)
        .timestamp(Timestamp::now())
}

/// Reply embed for `/stats`.
pub fn stats_reply(summary: &ListeningSummary, title: &str, theme: &Theme) -> CreateEmbed {
    recap_embed(summary, theme).title(title.to_string())
}
