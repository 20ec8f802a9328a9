// ============================================================================
// Replay Driver
// Feeds events into the registry in arrival order, with run timing
// ============================================================================

use crate::domain::BookConfig;
use crate::engine::BookRegistry;
use crate::replay::{Event, EventError};
use chrono::{DateTime, Utc};

/// Wall-clock and event counters for one replay run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplaySummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub events_applied: u64,
    /// Events dropped for a per-event reason (malformed record,
    /// duplicate live id). The run always continues past them.
    pub events_rejected: u64,
}

impl ReplaySummary {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// A finished run: the registry with every book's final state, plus the
/// run summary.
pub struct ReplayOutcome {
    pub registry: BookRegistry,
    pub summary: ReplaySummary,
}

/// Replay a stream whose items may already have failed parsing.
///
/// Parse failures and book-level rejections are logged and counted, never
/// fatal. Events are applied strictly in iteration order; per-book order
/// is whatever the source delivered, as required for deterministic
/// matching.
pub fn replay<I>(events: I, config: BookConfig) -> ReplayOutcome
where
    I: IntoIterator<Item = Result<Event, EventError>>,
{
    let started_at = Utc::now();
    let mut registry = BookRegistry::new(config);
    let mut applied: u64 = 0;
    let mut rejected: u64 = 0;

    for item in events {
        match item {
            Ok(event) => match registry.apply(event) {
                Ok(()) => applied += 1,
                Err(error) => {
                    rejected += 1;
                    tracing::warn!(%error, "event rejected by book");
                },
            },
            Err(error) => {
                rejected += 1;
                tracing::warn!(%error, "malformed event skipped");
            },
        }
    }

    let finished_at = Utc::now();
    tracing::debug!(
        events_applied = applied,
        events_rejected = rejected,
        books = registry.len(),
        "replay finished"
    );

    ReplayOutcome {
        registry,
        summary: ReplaySummary {
            started_at,
            finished_at,
            events_applied: applied,
            events_rejected: rejected,
        },
    }
}

/// Replay a stream of already-typed events.
pub fn replay_events<I>(events: I, config: BookConfig) -> ReplayOutcome
where
    I: IntoIterator<Item = Event>,
{
    replay(events.into_iter().map(Ok), config)
}
