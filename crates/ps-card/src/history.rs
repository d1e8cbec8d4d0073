//! History provider seam and the 24 h history loader.
//!
//! Fetch failures never escape this module: they are logged and the
//! caller gets an empty series, which renders as "no data".

use crate::sensor::parse_state;
use chrono::{DateTime, Duration, TimeZone, Utc};
use ps_chart::{HistoryKind, HistoryPlot, HistorySample, HistoryStats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Length of the history window ending now.
pub const HISTORY_WINDOW_HOURS: i64 = 24;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("history backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("malformed history response: {reason}")]
    Malformed { reason: String },
}

/// One raw state change as returned by the history API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl RawHistoryEntry {
    pub fn new(state: impl Into<String>, last_changed: DateTime<Utc>) -> Self {
        Self {
            entity_id: None,
            state: state.into(),
            last_changed: Some(last_changed),
            last_updated: None,
        }
    }

    /// `last_changed`, falling back to `last_updated`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_changed.or(self.last_updated)
    }

    /// Numeric sample, `None` for non-numeric states or missing timestamps.
    pub fn to_sample(&self) -> Option<HistorySample> {
        let value = parse_state(&self.state)?;
        Some(HistorySample {
            timestamp: self.timestamp()?,
            value,
        })
    }
}

/// Numeric samples from raw entries, sorted by time.
pub fn parse_history(entries: &[RawHistoryEntry]) -> Vec<HistorySample> {
    let mut samples: Vec<HistorySample> = entries
        .iter()
        .filter_map(RawHistoryEntry::to_sample)
        .collect();
    samples.sort_by_key(|s| s.timestamp);
    samples
}

/// Asynchronous source of entity history.
pub trait HistoryProvider {
    async fn fetch_history(
        &self,
        entity_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawHistoryEntry>, HistoryError>;
}

/// In-memory history, e.g. loaded from a saved history API response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedHistory {
    entries: HashMap<String, Vec<RawHistoryEntry>>,
}

impl RecordedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, entries: Vec<RawHistoryEntry>) {
        self.entries.entry(entity_id.into()).or_default().extend(entries);
    }

    /// Parse a history API response: one inner list per entity, the entity
    /// id taken from the first entry that carries one.
    pub fn from_json_str(s: &str) -> Result<Self, HistoryError> {
        let lists: Vec<Vec<RawHistoryEntry>> =
            serde_json::from_str(s).map_err(|e| HistoryError::Malformed {
                reason: e.to_string(),
            })?;
        let mut history = Self::new();
        for list in lists {
            let Some(id) = list.iter().find_map(|e| e.entity_id.clone()) else {
                return Err(HistoryError::Malformed {
                    reason: "history list without entity_id".to_string(),
                });
            };
            history.insert(id, list);
        }
        Ok(history)
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl HistoryProvider for RecordedHistory {
    async fn fetch_history(
        &self,
        entity_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawHistoryEntry>, HistoryError> {
        let entries = self.entries.get(entity_id).map(Vec::as_slice).unwrap_or_default();
        Ok(entries
            .iter()
            .filter(|e| e.timestamp().is_none_or(|ts| ts >= start && ts <= end))
            .cloned()
            .collect())
    }
}

/// Content of the history modal for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryView {
    pub entity_id: String,
    pub kind: HistoryKind,
    pub samples: Vec<HistorySample>,
    pub stats: HistoryStats,
    /// `None` renders the "no data" message.
    pub plot: Option<HistoryPlot>,
}

/// Fetch the last 24 h for `entity_id` and lay out the history plot.
///
/// Provider errors degrade to an empty view.
pub async fn load_history<P, Tz>(
    provider: &P,
    entity_id: &str,
    kind: HistoryKind,
    now: DateTime<Utc>,
    plot_width: f64,
    tz: &Tz,
) -> HistoryView
where
    P: HistoryProvider,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let start = now - Duration::hours(HISTORY_WINDOW_HOURS);
    let entries = match provider.fetch_history(entity_id, start, now).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(entity = entity_id, error = %e, "history fetch failed, showing no data");
            Vec::new()
        }
    };
    let samples = parse_history(&entries);
    debug!(entity = entity_id, raw = entries.len(), samples = samples.len(), "history loaded");
    HistoryView {
        entity_id: entity_id.to_string(),
        kind,
        stats: HistoryStats::from_samples(&samples),
        plot: HistoryPlot::build(&samples, plot_width, kind, tz),
        samples,
    }
}
