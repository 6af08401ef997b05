//! Event dispatch.
//!
//! An accepted event is delivered to every configured sink for its channel
//! kind. Sinks are isolated from each other: one failing delivery is logged
//! and reported, and the remaining sinks still get their attempt. Nothing
//! here retries and nothing re-enters the idempotency gate, so a partial
//! failure can never cause a duplicate announcement.

pub mod sink;


use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::Http;

use crate::bot::embed;
use crate::bot::theme::Theme;
use crate::data::{ChannelConfigRepository, GuildSettingRepository};
use crate::model::DomainEvent;

pub use sink::{DiscordChannelSink, Notification, NotificationSink, SinkError};

/// What happened at one sink during a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOutcome {
    Delivered { sink: String },
    Failed { sink: String, reason: String },
}

/// Per-sink outcomes for one dispatched event, in sink order.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub outcomes: Vec<SinkOutcome>,
}

impl DeliveryReport {
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SinkOutcome::Delivered { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.delivered()
    }
}

/// Attempts every delivery in order, collecting per-sink outcomes.
pub async fn deliver_all(
    deliveries: Vec<(Box<dyn NotificationSink>, Notification)>,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for (sink, notification) in deliveries {
        let outcome = match sink.deliver(&notification).await {
            Ok(()) => SinkOutcome::Delivered { sink: sink.label() },
            Err(err) => {
                tracing::warn!(sink = %sink.label(), "delivery failed: {err}");
                SinkOutcome::Failed {
                    sink: sink.label(),
                    reason: err.to_string(),
                }
            }
        };
        report.outcomes.push(outcome);
    }

    report
}

/// Embed theme for a guild, defaulting when unset, unknown, or unreadable.
///
/// A theme is cosmetic; a failed read must not cost an already-committed
/// event its delivery to this or any later sink.
async fn theme_for_guild(db: &DatabaseConnection, guild_id: i64) -> Theme {
    match GuildSettingRepository::new(db).get_theme(guild_id).await {
        Ok(name) => name
            .and_then(|name| Theme::by_name(&name))
            .unwrap_or_default(),
        Err(err) => {
            tracing::warn!(guild_id, "theme lookup failed, using default: {err}");
            Theme::default()
        }
    }
}

/// Routes accepted events to the Discord channels configured for them.
pub struct Dispatcher {
    db: DatabaseConnection,
    http: Arc<Http>,
}

impl Dispatcher {
    pub fn new(db: DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Delivers one accepted event to every guild that configured a channel
    /// for its kind. The sink set is read fresh from the store on each call,
    /// so routing changes apply to the very next event.
    pub async fn dispatch(&self, event: &DomainEvent) -> Result<DeliveryReport, DbErr> {
        let configs = ChannelConfigRepository::new(&self.db)
            .all_for_kind(event.channel_kind())
            .await?;

        if configs.is_empty() {
            tracing::debug!(
                event_type = event.event_type(),
                "no channels configured, event dropped after recording"
            );
            return Ok(DeliveryReport::default());
        }

        let mut deliveries: Vec<(Box<dyn NotificationSink>, Notification)> = Vec::new();

        for config in configs {
            let theme = theme_for_guild(&self.db, config.guild_id).await;

            deliveries.push((
                Box::new(DiscordChannelSink::new(
                    self.http.clone(),
                    config.guild_id,
                    config.channel_id,
                )),
                embed::render_event(event, &theme),
            ));
        }

        let report = deliver_all(deliveries).await;

        tracing::info!(
            event_type = event.event_type(),
            natural_key = %event.natural_key(),
            delivered = report.delivered(),
            failed = report.failed(),
            "event dispatched"
        );

        Ok(report)
    }
}
