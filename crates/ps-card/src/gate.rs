//! Change-detection gate in front of full recomputation.
//!
//! The gate is owned by the caller's render loop and handed to the card on
//! each state update; nothing here is global.

use crate::config::PointConfig;
use crate::sensor::SensorSource;
use std::collections::HashMap;
use tracing::trace;

/// Temperature change [°C] that triggers a re-render.
pub const TEMPERATURE_THRESHOLD_C: f64 = 0.1;
/// Relative humidity change [% points] that triggers a re-render.
pub const HUMIDITY_THRESHOLD_PCT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Reading {
    temperature: f64,
    humidity: f64,
}

/// Last accepted readings per sensor pair.
#[derive(Debug, Clone, Default)]
pub struct ChangeGate {
    accepted: bool,
    previous: HashMap<(String, String), Reading>,
}

impl ChangeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a render has been accepted yet.
    pub fn has_accepted(&self) -> bool {
        self.accepted
    }

    /// Decide whether `source` differs enough from the last accepted values.
    ///
    /// The first call always passes. Pairs with a missing entity are
    /// ignored; a pair seen for the first time passes.
    pub fn should_update<S: SensorSource + ?Sized>(
        &self,
        points: &[PointConfig],
        source: &S,
    ) -> bool {
        if !self.accepted {
            return true;
        }
        points.iter().any(|p| {
            let Some(current) = read_pair(p, source) else {
                return false;
            };
            match self.previous.get(&key(p)) {
                None => true,
                Some(prev) => {
                    let changed = (current.temperature - prev.temperature).abs()
                        > TEMPERATURE_THRESHOLD_C
                        || (current.humidity - prev.humidity).abs() > HUMIDITY_THRESHOLD_PCT;
                    if changed {
                        trace!(temp = %p.temp, humidity = %p.humidity, "sensor pair changed");
                    }
                    changed
                }
            }
        })
    }

    /// Store the current readings as the accepted baseline.
    pub fn record<S: SensorSource + ?Sized>(&mut self, points: &[PointConfig], source: &S) {
        for p in points {
            if let Some(reading) = read_pair(p, source) {
                self.previous.insert(key(p), reading);
            }
        }
        self.accepted = true;
    }

    pub fn reset(&mut self) {
        self.accepted = false;
        self.previous.clear();
    }
}

fn key(p: &PointConfig) -> (String, String) {
    (p.temp.clone(), p.humidity.clone())
}

fn read_pair<S: SensorSource + ?Sized>(p: &PointConfig, source: &S) -> Option<Reading> {
    Some(Reading {
        temperature: source.numeric_state(&p.temp)?,
        humidity: source.numeric_state(&p.humidity)?,
    })
}
