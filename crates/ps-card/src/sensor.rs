//! Sensor state lookup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Read access to current entity states.
pub trait SensorSource {
    /// Raw state string, `None` when the entity does not exist.
    fn state(&self, entity_id: &str) -> Option<&str>;

    /// Numeric reading, `None` when absent or not numeric.
    fn numeric_state(&self, entity_id: &str) -> Option<f64> {
        self.state(entity_id).and_then(parse_state)
    }

    /// Display name for an entity, when the source knows one.
    fn friendly_name(&self, _entity_id: &str) -> Option<&str> {
        None
    }
}

/// Parse the leading decimal number of a state string.
///
/// `"21.5"` and `"21.5 °C"` both read as 21.5; `"unavailable"` and
/// `"unknown"` read as `None`.
pub fn parse_state(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let numeric_len = s
        .char_indices()
        .take_while(|&(i, c)| {
            c.is_ascii_digit()
                || c == '.'
                || ((c == '-' || c == '+') && i == 0)
                || c == 'e'
                || c == 'E'
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    // Longest prefix that parses, e.g. "1e" → "1".
    (1..=numeric_len)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
}

impl SensorSource for HashMap<String, String> {
    fn state(&self, entity_id: &str) -> Option<&str> {
        self.get(entity_id).map(String::as_str)
    }
}

impl SensorSource for BTreeMap<String, String> {
    fn state(&self, entity_id: &str) -> Option<&str> {
        self.get(entity_id).map(String::as_str)
    }
}

/// One entity as reported by the home-automation state API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<EntityAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
}

/// Snapshot of entity states keyed by entity id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    pub entities: HashMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, entity_id: impl Into<String>, state: impl Into<String>) {
        let state = state.into();
        self.entities
            .entry(entity_id.into())
            .and_modify(|e| e.state.clone_from(&state))
            .or_insert_with(|| EntityState {
                state,
                attributes: None,
            });
    }

    pub fn with(mut self, entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        self.set(entity_id, state);
        self
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

impl SensorSource for StateSnapshot {
    fn state(&self, entity_id: &str) -> Option<&str> {
        self.entities.get(entity_id).map(|e| e.state.as_str())
    }

    fn friendly_name(&self, entity_id: &str) -> Option<&str> {
        self.entities
            .get(entity_id)?
            .attributes
            .as_ref()?
            .friendly_name
            .as_deref()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatted_numbers_parse_back(v in -1e6_f64..1e6, unit in "( °C| %|%|)") {
            let raw = format!("{v}{unit}");
            prop_assert_eq!(parse_state(&raw), Some(v));
        }
    }
}
